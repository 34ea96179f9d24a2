//! DTOs for the exercise tracker endpoints.
//!
//! Ids are rendered as strings under `_id`.

use serde::{Deserialize, Serialize};

use super::FormValue;
use crate::application::services::exercise_service::{ExerciseInput, LogQueryInput};
use crate::domain::entities::{Exercise, ExerciseLog, User};
use crate::utils::date_parser::format_date_string;

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub username: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub username: String,
    #[serde(rename = "_id")]
    pub id: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            username: user.username,
            id: user.id.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AddExerciseRequest {
    pub description: Option<String>,
    pub duration: Option<FormValue>,
    pub date: Option<FormValue>,
}

impl From<AddExerciseRequest> for ExerciseInput {
    fn from(req: AddExerciseRequest) -> Self {
        Self {
            description: req.description,
            duration: req.duration.map(FormValue::into_text),
            date: req.date.map(FormValue::into_text),
        }
    }
}

/// The user merged with the exercise just logged.
#[derive(Debug, Serialize)]
pub struct ExerciseResponse {
    pub username: String,
    pub description: String,
    pub duration: i64,
    pub date: String,
    #[serde(rename = "_id")]
    pub id: String,
}

impl From<(User, Exercise)> for ExerciseResponse {
    fn from((user, exercise): (User, Exercise)) -> Self {
        Self {
            username: user.username,
            description: exercise.description,
            duration: exercise.duration,
            date: format_date_string(&exercise.date),
            id: user.id.to_string(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct LogQuery {
    pub from: Option<String>,
    pub to: Option<String>,
    pub limit: Option<String>,
}

impl From<LogQuery> for LogQueryInput {
    fn from(q: LogQuery) -> Self {
        Self {
            from: q.from,
            to: q.to,
            limit: q.limit,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LogEntry {
    pub description: String,
    pub duration: i64,
    pub date: String,
}

#[derive(Debug, Serialize)]
pub struct LogResponse {
    pub username: String,
    pub count: usize,
    #[serde(rename = "_id")]
    pub id: String,
    pub log: Vec<LogEntry>,
}

impl From<ExerciseLog> for LogResponse {
    fn from(log: ExerciseLog) -> Self {
        let entries: Vec<LogEntry> = log
            .exercises
            .into_iter()
            .map(|e| LogEntry {
                date: format_date_string(&e.date),
                description: e.description,
                duration: e.duration,
            })
            .collect();

        Self {
            username: log.user.username,
            count: entries.len(),
            id: log.user.id.to_string(),
            log: entries,
        }
    }
}
