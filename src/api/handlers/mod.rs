//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to one microservice.

pub mod exercise;
pub mod file_metadata;
pub mod health;
pub mod shorturl;
pub mod timestamp;
pub mod whoami;

pub use exercise::{
    add_exercise_handler, create_user_handler, exercise_log_handler, list_users_handler,
};
pub use file_metadata::file_metadata_handler;
pub use health::health_handler;
pub use shorturl::{redirect_handler, shorten_handler};
pub use timestamp::{date_handler, now_handler};
pub use whoami::whoami_handler;
