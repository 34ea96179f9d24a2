//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health` - Health check: store connectivity
//! - `/api/*`       - Microservice endpoints (see [`crate::api::routes`])
//!
//! # Middleware
//!
//! - **CORS** - Permissive; any origin may call the API
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::cors::CorsLayer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `max_upload_bytes` - request body limit for `POST /api/fileanalyse`
pub fn app_router(state: AppState, max_upload_bytes: usize) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/health", get(health_handler))
        .merge(api::routes::api_routes(max_upload_bytes))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
