//! Exercise tracker service: users and their exercise logs.

use std::sync::{Arc, LazyLock};

use chrono::Utc;
use regex::Regex;
use tracing::{debug, info};

use crate::domain::entities::{Exercise, ExerciseLog, LogFilter, NewExercise, User};
use crate::domain::repositories::{ExerciseRepository, UserRepository};
use crate::error::AppError;
use crate::utils::date_parser::{end_of_day, parse_date, parse_leading_int, start_of_day};

/// Description stored when an exercise is logged without one.
pub const DEFAULT_DESCRIPTION: &str = "No description provided.";

static USERNAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_]+$").expect("username regex is valid"));

static USER_ID_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("user id regex is valid"));

/// Raw exercise fields as submitted by a client.
///
/// Values are kept as text so that form and JSON submissions share one
/// parsing path.
#[derive(Debug, Clone, Default)]
pub struct ExerciseInput {
    pub description: Option<String>,
    pub duration: Option<String>,
    pub date: Option<String>,
}

/// Raw log query parameters as submitted by a client.
#[derive(Debug, Clone, Default)]
pub struct LogQueryInput {
    pub from: Option<String>,
    pub to: Option<String>,
    pub limit: Option<String>,
}

/// Service for exercise tracker users and logs.
pub struct ExerciseService {
    users: Arc<dyn UserRepository>,
    exercises: Arc<dyn ExerciseRepository>,
}

impl ExerciseService {
    /// Creates a new exercise service.
    pub fn new(users: Arc<dyn UserRepository>, exercises: Arc<dyn ExerciseRepository>) -> Self {
        Self { users, exercises }
    }

    /// Creates a user, or returns the existing user with that name.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the username is missing or
    /// contains characters other than ASCII letters, digits and `_`.
    pub async fn create_user(&self, username: Option<&str>) -> Result<User, AppError> {
        let username = username
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .ok_or_else(|| AppError::bad_request("Username is required."))?;

        if !USERNAME_REGEX.is_match(username) {
            return Err(AppError::bad_request("Invalid Username."));
        }

        match self.users.create(username).await {
            Ok(user) => {
                info!(user_id = user.id, username, "User created");
                Ok(user)
            }
            Err(e) if e.is_conflict() => {
                debug!(username, "Username taken, returning existing user");
                self.users
                    .find_by_username(username)
                    .await?
                    .ok_or_else(|| AppError::internal("Conflicting user is not readable"))
            }
            Err(e) => Err(e),
        }
    }

    /// Lists all users ordered by id.
    pub async fn list_users(&self) -> Result<Vec<User>, AppError> {
        self.users.list().await
    }

    /// Logs an exercise for a user.
    ///
    /// - `description` defaults to [`DEFAULT_DESCRIPTION`]
    /// - `duration` is read like `parseInt` and must be positive
    /// - `date` defaults to now
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for a malformed id, a non-positive
    /// duration, an unparsable date, or an unknown user.
    pub async fn add_exercise(
        &self,
        user_id: &str,
        input: ExerciseInput,
    ) -> Result<(User, Exercise), AppError> {
        let user_id = parse_user_id(user_id)?;

        let description = non_blank(input.description)
            .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string());

        let duration = input
            .duration
            .as_deref()
            .and_then(parse_leading_int)
            .unwrap_or(0);
        if duration <= 0 {
            return Err(AppError::bad_request(
                "Duration should not be less than or equal to 0.",
            ));
        }

        let date = match non_blank(input.date) {
            Some(date) => parse_date(&date).map_err(|_| AppError::bad_request("Invalid Date."))?,
            None => Utc::now(),
        };

        let user = self.require_user(user_id).await?;

        let exercise = self
            .exercises
            .create(NewExercise {
                user_id: user.id,
                description,
                duration,
                date,
            })
            .await?;

        info!(user_id = user.id, exercise_id = exercise.id, "Exercise logged");
        Ok((user, exercise))
    }

    /// Returns a user's exercise log.
    ///
    /// `from` and `to` widen to the start and end of their day; unparsable
    /// bounds are ignored. `limit` is read like `parseInt`; zero, negative or
    /// unparsable limits return every entry.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for a malformed id or an unknown user.
    pub async fn exercise_log(
        &self,
        user_id: &str,
        query: LogQueryInput,
    ) -> Result<ExerciseLog, AppError> {
        let user_id = parse_user_id(user_id)?;

        let filter = LogFilter {
            from: query
                .from
                .as_deref()
                .and_then(|d| parse_date(d).ok())
                .map(start_of_day),
            to: query
                .to
                .as_deref()
                .and_then(|d| parse_date(d).ok())
                .map(end_of_day),
            limit: query
                .limit
                .as_deref()
                .and_then(parse_leading_int)
                .filter(|&limit| limit > 0),
        };

        let user = self.require_user(user_id).await?;
        let exercises = self.exercises.list_for_user(user.id, &filter).await?;

        Ok(ExerciseLog { user, exercises })
    }

    /// Counts stored users and exercises.
    pub async fn counts(&self) -> Result<(i64, i64), AppError> {
        Ok((self.users.count().await?, self.exercises.count().await?))
    }

    async fn require_user(&self, user_id: i64) -> Result<User, AppError> {
        self.users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::bad_request("User not found."))
    }
}

fn parse_user_id(input: &str) -> Result<i64, AppError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(AppError::bad_request("ID is required."));
    }

    if !USER_ID_REGEX.is_match(input) {
        return Err(AppError::bad_request("Invalid ID."));
    }

    input
        .parse()
        .map_err(|_| AppError::bad_request("Invalid ID."))
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::{MockExerciseRepository, MockUserRepository};
    use chrono::{DateTime, TimeZone};

    fn service(users: MockUserRepository, exercises: MockExerciseRepository) -> ExerciseService {
        ExerciseService::new(Arc::new(users), Arc::new(exercises))
    }

    fn stored(new_exercise: NewExercise, id: i64) -> Exercise {
        Exercise {
            id,
            user_id: new_exercise.user_id,
            description: new_exercise.description,
            duration: new_exercise.duration,
            date: new_exercise.date,
        }
    }

    fn utc(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    #[tokio::test]
    async fn test_create_user_success() {
        let mut users = MockUserRepository::new();
        users
            .expect_create()
            .withf(|name| name == "fcc_test")
            .times(1)
            .returning(|name| Ok(User::new(1, name)));

        let service = service(users, MockExerciseRepository::new());

        let user = service.create_user(Some(" fcc_test ")).await.unwrap();
        assert_eq!(user, User::new(1, "fcc_test"));
    }

    #[tokio::test]
    async fn test_create_user_validation() {
        let mut users = MockUserRepository::new();
        users.expect_create().times(0);
        let service = service(users, MockExerciseRepository::new());

        let missing = service.create_user(None).await.unwrap_err();
        assert_eq!(missing.to_string(), "Username is required.");

        let blank = service.create_user(Some("   ")).await.unwrap_err();
        assert_eq!(blank.to_string(), "Username is required.");

        let invalid = service.create_user(Some("bad name!")).await.unwrap_err();
        assert_eq!(invalid.to_string(), "Invalid Username.");
    }

    #[tokio::test]
    async fn test_create_user_conflict_returns_existing() {
        let mut users = MockUserRepository::new();
        users
            .expect_create()
            .returning(|_| Err(AppError::conflict("dup", Some("users_username_key".into()))));
        users
            .expect_find_by_username()
            .withf(|name| name == "taken")
            .times(1)
            .returning(|name| Ok(Some(User::new(7, name))));

        let service = service(users, MockExerciseRepository::new());

        assert_eq!(service.create_user(Some("taken")).await.unwrap().id, 7);
    }

    #[tokio::test]
    async fn test_add_exercise_defaults() {
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_id()
            .returning(|id| Ok(Some(User::new(id, "runner"))));

        let mut exercises = MockExerciseRepository::new();
        exercises
            .expect_create()
            .withf(|e| e.description == DEFAULT_DESCRIPTION && e.duration == 30)
            .times(1)
            .returning(|e| Ok(stored(e, 1)));

        let service = service(users, exercises);

        let input = ExerciseInput {
            description: Some("  ".to_string()),
            duration: Some("30min".to_string()),
            date: None,
        };
        let before = Utc::now();
        let (user, exercise) = service.add_exercise("3", input).await.unwrap();

        assert_eq!(user.username, "runner");
        assert_eq!(exercise.user_id, 3);
        assert!(exercise.date >= before);
    }

    #[tokio::test]
    async fn test_add_exercise_with_date() {
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_id()
            .returning(|id| Ok(Some(User::new(id, "runner"))));

        let mut exercises = MockExerciseRepository::new();
        exercises
            .expect_create()
            .withf(|e| e.date == utc(1990, 1, 1) && e.description == "swim")
            .returning(|e| Ok(stored(e, 2)));

        let service = service(users, exercises);

        let input = ExerciseInput {
            description: Some("swim".to_string()),
            duration: Some("45".to_string()),
            date: Some("1990-01-01".to_string()),
        };
        let (_, exercise) = service.add_exercise("1", input).await.unwrap();
        assert_eq!(exercise.duration, 45);
    }

    #[tokio::test]
    async fn test_add_exercise_validation_order() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_id().times(0);
        let service = service(users, MockExerciseRepository::new());

        let err = service
            .add_exercise("abc", ExerciseInput::default())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid ID.");

        let err = service
            .add_exercise("1", ExerciseInput::default())
            .await
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Duration should not be less than or equal to 0."
        );

        let input = ExerciseInput {
            duration: Some("-10".to_string()),
            ..Default::default()
        };
        assert!(service.add_exercise("1", input).await.is_err());

        let input = ExerciseInput {
            duration: Some("10".to_string()),
            date: Some("not a date".to_string()),
            ..Default::default()
        };
        let err = service.add_exercise("1", input).await.unwrap_err();
        assert_eq!(err.to_string(), "Invalid Date.");
    }

    #[tokio::test]
    async fn test_add_exercise_unknown_user() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_id().returning(|_| Ok(None));
        let mut exercises = MockExerciseRepository::new();
        exercises.expect_create().times(0);

        let service = service(users, exercises);

        let input = ExerciseInput {
            duration: Some("10".to_string()),
            ..Default::default()
        };
        let err = service.add_exercise("99", input).await.unwrap_err();
        assert_eq!(err.to_string(), "User not found.");
    }

    #[tokio::test]
    async fn test_exercise_log_builds_filter() {
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_id()
            .returning(|id| Ok(Some(User::new(id, "runner"))));

        let mut exercises = MockExerciseRepository::new();
        exercises
            .expect_list_for_user()
            .withf(|user_id, filter| {
                *user_id == 5
                    && filter.from == Some(utc(1990, 1, 1))
                    && filter.to == Some(utc(1990, 2, 1) - chrono::Duration::milliseconds(1))
                    && filter.limit == Some(2)
            })
            .times(1)
            .returning(|_, _| Ok(Vec::new()));

        let service = service(users, exercises);

        let query = LogQueryInput {
            from: Some("1990-01-01".to_string()),
            to: Some("1990-01-31".to_string()),
            limit: Some("2".to_string()),
        };
        let log = service.exercise_log("5", query).await.unwrap();
        assert_eq!(log.user.id, 5);
        assert!(log.exercises.is_empty());
    }

    #[tokio::test]
    async fn test_exercise_log_ignores_bad_parameters() {
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_id()
            .returning(|id| Ok(Some(User::new(id, "runner"))));

        let mut exercises = MockExerciseRepository::new();
        exercises
            .expect_list_for_user()
            .withf(|_, filter| *filter == LogFilter::default())
            .times(1)
            .returning(|_, _| Ok(Vec::new()));

        let service = service(users, exercises);

        let query = LogQueryInput {
            from: Some("yesterday".to_string()),
            to: Some("".to_string()),
            limit: Some("-3".to_string()),
        };
        assert!(service.exercise_log("5", query).await.is_ok());
    }

    #[tokio::test]
    async fn test_exercise_log_unknown_user() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_id().returning(|_| Ok(None));

        let service = service(users, MockExerciseRepository::new());

        let err = service
            .exercise_log("12", LogQueryInput::default())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "User not found.");
    }
}
