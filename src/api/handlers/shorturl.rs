//! Handlers for the URL shortener endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use url::Url;

use crate::api::dto::shorturl::{ShortenRequest, ShortenResponse};
use crate::api::extract::Payload;
use crate::error::AppError;
use crate::state::AppState;

/// Message returned for every failed lookup, whatever the cause.
pub const NO_SHORT_URL: &str = "No short URL found for the given input.";

/// Shortens a URL, reusing the existing code when it was seen before.
///
/// # Endpoint
///
/// `POST /api/shorturl`
///
/// # Request Body
///
/// JSON or urlencoded form with a `url` field.
///
/// # Response
///
/// ```json
/// { "original_url": "https://example.com", "short_url": 1 }
/// ```
///
/// # Errors
///
/// - 400 `URL is required.` when `url` is missing or blank
/// - 400 `invalid url` when the URL is rejected or cannot be stored
pub async fn shorten_handler(
    State(state): State<AppState>,
    Payload(payload): Payload<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    let original_url = payload
        .url
        .map(|u| u.trim().to_string())
        .filter(|u| !u.is_empty())
        .ok_or_else(|| AppError::bad_request("URL is required."))?;

    let short_url = state.short_url_service.shorten(&original_url).await?;

    Ok(Json(ShortenResponse {
        original_url,
        short_url,
    }))
}

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /api/shorturl/{code}`
///
/// # Response Codes
///
/// - **302 Found**: `Location` holds the original URL
/// - **400 Bad Request**: malformed or unknown code
pub async fn redirect_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let target = state
        .short_url_service
        .resolve(&code)
        .await
        .map_err(|e| {
            tracing::debug!(code = %code, reason = %e, "Short code not resolved");
            AppError::bad_request(NO_SHORT_URL)
        })?;

    // Re-serialize so non-ASCII hosts and paths become a valid header value.
    let location = Url::parse(&target).map(String::from).unwrap_or(target);

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]))
}
