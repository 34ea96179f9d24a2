//! DTOs for the timestamp endpoints.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::utils::date_parser::format_utc;

/// A single instant as Unix milliseconds and an HTTP-date string.
#[derive(Debug, Serialize)]
pub struct TimestampResponse {
    pub unix: i64,
    pub utc: String,
}

impl From<DateTime<Utc>> for TimestampResponse {
    fn from(dt: DateTime<Utc>) -> Self {
        Self {
            unix: dt.timestamp_millis(),
            utc: format_utc(&dt),
        }
    }
}
