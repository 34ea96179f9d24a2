//! Repository trait for exercise log entries.

use crate::domain::entities::{Exercise, LogFilter, NewExercise};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for exercises.
///
/// Callers verify that the owning user exists before inserting.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExerciseRepository: Send + Sync {
    /// Stores a new exercise and returns it with its assigned id.
    async fn create(&self, new_exercise: NewExercise) -> Result<Exercise, AppError>;

    /// Lists a user's exercises matching `filter`, ordered by date then id.
    ///
    /// `filter.limit` caps the number of entries after ordering.
    async fn list_for_user(
        &self,
        user_id: i64,
        filter: &LogFilter,
    ) -> Result<Vec<Exercise>, AppError>;

    async fn count(&self) -> Result<i64, AppError>;
}
