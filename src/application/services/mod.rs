//! Business logic services for the application layer.

pub mod exercise_service;
pub mod short_url_service;

pub use exercise_service::ExerciseService;
pub use short_url_service::ShortUrlService;
