//! Core domain entities.
//!
//! # Entity Types
//!
//! - [`ShortLink`] - A URL and its numeric short code
//! - [`User`] - An exercise tracker account
//! - [`Exercise`] - A logged exercise session
//!
//! Creation inputs use separate structs (`NewExercise`) and query parameters
//! are grouped in [`LogFilter`].

pub mod exercise;
pub mod short_link;
pub mod user;

pub use exercise::{Exercise, ExerciseLog, LogFilter, NewExercise};
pub use short_link::{InsertOutcome, ShortLink};
pub use user::User;
