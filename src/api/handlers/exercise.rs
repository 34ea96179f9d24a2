//! Handlers for the exercise tracker endpoints.

use axum::{
    Json,
    extract::{Path, Query, State},
};

use crate::api::dto::exercise::{
    AddExerciseRequest, CreateUserRequest, ExerciseResponse, LogQuery, LogResponse, UserResponse,
};
use crate::api::extract::Payload;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a user, or returns the existing user with the same name.
///
/// # Endpoint
///
/// `POST /api/users`
///
/// # Response
///
/// ```json
/// { "username": "alice", "_id": "1" }
/// ```
pub async fn create_user_handler(
    State(state): State<AppState>,
    Payload(payload): Payload<CreateUserRequest>,
) -> Result<Json<UserResponse>, AppError> {
    let user = state
        .exercise_service
        .create_user(payload.username.as_deref())
        .await?;

    Ok(Json(user.into()))
}

/// `GET /api/users` lists every user ordered by id.
pub async fn list_users_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResponse>>, AppError> {
    let users = state.exercise_service.list_users().await?;

    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// Logs an exercise for a user.
///
/// # Endpoint
///
/// `POST /api/users/{id}/exercises`
///
/// # Request Body
///
/// JSON or form with `description` (optional), `duration` (minutes) and
/// `date` (optional, defaults to now).
///
/// # Response
///
/// ```json
/// {
///   "username": "alice",
///   "description": "run",
///   "duration": 30,
///   "date": "Mon Jan 01 1990",
///   "_id": "1"
/// }
/// ```
pub async fn add_exercise_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Payload(payload): Payload<AddExerciseRequest>,
) -> Result<Json<ExerciseResponse>, AppError> {
    let added = state
        .exercise_service
        .add_exercise(&id, payload.into())
        .await?;

    Ok(Json(added.into()))
}

/// Returns a user's exercise log.
///
/// # Endpoint
///
/// `GET /api/users/{id}/logs?from=YYYY-MM-DD&to=YYYY-MM-DD&limit=N`
///
/// All query parameters are optional.
pub async fn exercise_log_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<LogQuery>,
) -> Result<Json<LogResponse>, AppError> {
    let log = state
        .exercise_service
        .exercise_log(&id, query.into())
        .await?;

    Ok(Json(log.into()))
}
