//! Handler for the file metadata endpoint.

use axum::{
    Json,
    extract::{
        Multipart,
        multipart::{MultipartError, MultipartRejection},
    },
    http::StatusCode,
};

use crate::api::dto::file_metadata::FileMetadataResponse;
use crate::error::AppError;

/// Multipart field carrying the upload.
pub const UPLOAD_FIELD: &str = "upfile";

/// Reports the name, content type and size of an uploaded file.
///
/// # Endpoint
///
/// `POST /api/fileanalyse` (`multipart/form-data`, field `upfile`)
///
/// The body is streamed and counted; nothing is written to disk.
///
/// # Errors
///
/// - 400 `No file uploaded.` when no `upfile` file part is present
/// - 400 for malformed multipart bodies
/// - 413 when the body exceeds the configured upload limit
pub async fn file_metadata_handler(
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<FileMetadataResponse>, AppError> {
    let mut multipart = multipart.map_err(|e| AppError::bad_request(e.body_text()))?;

    while let Some(mut field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }
        let Some(name) = field.file_name().map(str::to_string) else {
            continue;
        };
        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();

        let mut size: u64 = 0;
        while let Some(chunk) = field.chunk().await.map_err(multipart_error)? {
            size += chunk.len() as u64;
        }

        tracing::debug!(name = %name, size, "File analysed");

        return Ok(Json(FileMetadataResponse {
            name,
            content_type,
            size,
        }));
    }

    Err(AppError::bad_request("No file uploaded."))
}

fn multipart_error(e: MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge
    } else {
        AppError::bad_request(e.body_text())
    }
}
