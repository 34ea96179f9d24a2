//! Exercise entities and log query parameters.

use chrono::{DateTime, Utc};

use super::User;

/// A logged exercise session belonging to a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    pub id: i64,
    pub user_id: i64,
    pub description: String,
    /// Duration in minutes, always positive.
    pub duration: i64,
    pub date: DateTime<Utc>,
}

/// Input data for logging a new exercise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewExercise {
    pub user_id: i64,
    pub description: String,
    pub duration: i64,
    pub date: DateTime<Utc>,
}

/// Filters applied when listing a user's exercises.
///
/// Bounds are inclusive. `limit: None` returns every matching entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogFilter {
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
    pub limit: Option<i64>,
}

impl LogFilter {
    /// Returns true if `date` lies within the bounds.
    pub fn contains(&self, date: &DateTime<Utc>) -> bool {
        self.from.is_none_or(|from| *date >= from) && self.to.is_none_or(|to| *date <= to)
    }
}

/// A user together with the exercises selected by a [`LogFilter`],
/// ordered by date then id.
#[derive(Debug, Clone)]
pub struct ExerciseLog {
    pub user: User,
    pub exercises: Vec<Exercise>,
}
