//! Handler for the request header parser endpoint.

use axum::{
    Json,
    extract::{ConnectInfo, State},
    http::{HeaderMap, header},
};
use std::net::SocketAddr;

use crate::api::dto::whoami::WhoAmIResponse;
use crate::state::AppState;
use crate::utils::client_ip::client_ip;

/// Reports the caller's IP address, preferred language and user agent.
///
/// # Endpoint
///
/// `GET /api/whoami`
///
/// Missing headers are reported as empty strings.
pub async fn whoami_handler(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
) -> Json<WhoAmIResponse> {
    let header_text = |name: header::HeaderName| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string()
    };

    Json(WhoAmIResponse {
        ipaddress: client_ip(&headers, Some(addr), state.behind_proxy),
        language: header_text(header::ACCEPT_LANGUAGE),
        software: header_text(header::USER_AGENT),
    })
}
