//! Handlers for the timestamp endpoints.

use axum::{Json, extract::Path};
use chrono::Utc;

use crate::api::dto::timestamp::TimestampResponse;
use crate::error::AppError;
use crate::utils::date_parser::parse_date;

/// `GET /api` returns the current instant.
pub async fn now_handler() -> Json<TimestampResponse> {
    Json(Utc::now().into())
}

/// Converts a date string or Unix millisecond count.
///
/// # Endpoint
///
/// `GET /api/{date}`
///
/// # Examples
///
/// - `/api/2015-12-25` → `{"unix":1451001600000,"utc":"Fri, 25 Dec 2015 00:00:00 GMT"}`
/// - `/api/1451001600000` → same instant
///
/// # Errors
///
/// 400 `Invalid Date` when the input is not understood or out of range.
pub async fn date_handler(Path(date): Path<String>) -> Result<Json<TimestampResponse>, AppError> {
    let dt = parse_date(&date).map_err(|e| AppError::bad_request(e.to_string()))?;

    Ok(Json(dt.into()))
}
