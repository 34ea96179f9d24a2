//! API route configuration.
//!
//! Every microservice lives under `/api`. Static segments take priority over
//! the `/api/{date}` capture, so `/api/whoami` and friends never reach the
//! timestamp handler.

use crate::api::handlers::{
    add_exercise_handler, create_user_handler, date_handler, exercise_log_handler,
    file_metadata_handler, list_users_handler, now_handler, redirect_handler, shorten_handler,
    whoami_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};

/// All public API routes.
///
/// # Endpoints
///
/// - `GET  /api`                      - Current timestamp
/// - `GET  /api/{date}`               - Timestamp for a date or Unix ms
/// - `GET  /api/whoami`               - Caller IP, language and user agent
/// - `POST /api/shorturl`             - Shorten a URL
/// - `GET  /api/shorturl/{code}`      - Redirect to the original URL
/// - `GET  /api/users`                - List exercise tracker users
/// - `POST /api/users`                - Create a user
/// - `POST /api/users/{id}/exercises` - Log an exercise
/// - `GET  /api/users/{id}/logs`      - Exercise log with optional bounds
/// - `POST /api/fileanalyse`          - Uploaded file metadata
///
/// `max_upload_bytes` bounds the `/api/fileanalyse` request body.
pub fn api_routes(max_upload_bytes: usize) -> Router<AppState> {
    Router::new()
        .route("/api", get(now_handler))
        .route("/api/whoami", get(whoami_handler))
        .route("/api/shorturl", post(shorten_handler))
        .route("/api/shorturl/{code}", get(redirect_handler))
        .route(
            "/api/users",
            get(list_users_handler).post(create_user_handler),
        )
        .route("/api/users/{id}/exercises", post(add_exercise_handler))
        .route("/api/users/{id}/logs", get(exercise_log_handler))
        .route(
            "/api/fileanalyse",
            post(file_metadata_handler).layer(DefaultBodyLimit::max(max_upload_bytes)),
        )
        .route("/api/{date}", get(date_handler))
}
