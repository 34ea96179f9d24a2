//! Application layer services implementing business logic.
//!
//! This layer validates input, coordinates repository calls, and applies
//! business rules. Services consume repository traits and provide a clean
//! API for HTTP handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::short_url_service::ShortUrlService`] - Short code allocation and resolution
//! - [`services::exercise_service::ExerciseService`] - Users and exercise logs

pub mod services;
