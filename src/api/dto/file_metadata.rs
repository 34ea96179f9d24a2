//! DTO for the file metadata endpoint.

use serde::Serialize;

/// Metadata of an uploaded file. The content itself is not kept.
#[derive(Debug, Serialize)]
pub struct FileMetadataResponse {
    pub name: String,
    #[serde(rename = "type")]
    pub content_type: String,
    pub size: u64,
}
