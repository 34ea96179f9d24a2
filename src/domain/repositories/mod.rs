//! Repository trait definitions for the domain layer.
//!
//! These traits abstract data access following the Repository pattern and are
//! implemented in the infrastructure layer.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - PostgreSQL implementations live in `crate::infrastructure::persistence`
//! - In-memory implementations live in `crate::infrastructure::memory`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`ShortLinkRepository`] - Short code allocation and lookup
//! - [`UserRepository`] - Exercise tracker accounts
//! - [`ExerciseRepository`] - Exercise log entries

pub mod exercise_repository;
pub mod short_link_repository;
pub mod user_repository;

pub use exercise_repository::ExerciseRepository;
pub use short_link_repository::ShortLinkRepository;
pub use user_repository::UserRepository;

#[cfg(test)]
pub use exercise_repository::MockExerciseRepository;
#[cfg(test)]
pub use short_link_repository::MockShortLinkRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
