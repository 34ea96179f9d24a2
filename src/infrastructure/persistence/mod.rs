//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx prepared
//! statements. Schema lives in `migrations/` and is applied at startup.
//!
//! # Repositories
//!
//! - [`PgShortLinkRepository`] - Short link storage and code counter
//! - [`PgUserRepository`] - Exercise tracker users
//! - [`PgExerciseRepository`] - Exercise log entries

pub mod pg_exercise_repository;
pub mod pg_short_link_repository;
pub mod pg_user_repository;

pub use pg_exercise_repository::PgExerciseRepository;
pub use pg_short_link_repository::PgShortLinkRepository;
pub use pg_user_repository::PgUserRepository;
