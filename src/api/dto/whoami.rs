//! DTO for the request header parser endpoint.

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct WhoAmIResponse {
    pub ipaddress: String,
    pub language: String,
    pub software: String,
}
