//! DTOs for the URL shortener endpoints.

use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct ShortenRequest {
    pub url: Option<String>,
}

/// Response for a shortened URL.
///
/// `original_url` echoes the submitted value; `short_url` is the numeric code.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub original_url: String,
    pub short_url: i64,
}
