#![allow(dead_code)]

use axum::Router;
use axum::extract::ConnectInfo;
use axum::routing::get;
use axum_test::TestServer;
use sqlx::PgPool;
use std::net::SocketAddr;
use tower::Layer;

use backend_microservices::api::handlers::health_handler;
use backend_microservices::api::routes::api_routes;
use backend_microservices::state::AppState;

pub const TEST_UPLOAD_LIMIT: usize = 1024;

pub const PEER_ADDR: &str = "127.0.0.1:12345";

/// Injects a fixed peer address, standing in for `into_make_service_with_connect_info`.
#[derive(Clone)]
pub struct MockConnectInfoLayer;

impl<S> Layer<S> for MockConnectInfoLayer {
    type Service = MockConnectInfoService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        MockConnectInfoService { inner }
    }
}

#[derive(Clone)]
pub struct MockConnectInfoService<S> {
    inner: S,
}

impl<S, B> tower::Service<axum::http::Request<B>> for MockConnectInfoService<S>
where
    S: tower::Service<axum::http::Request<B>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    B: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: axum::http::Request<B>) -> Self::Future {
        let addr: SocketAddr = PEER_ADDR.parse().unwrap();
        req.extensions_mut().insert(ConnectInfo(addr));
        self.inner.call(req)
    }
}

pub fn create_memory_state() -> AppState {
    AppState::in_memory(false)
}

pub fn create_pg_state(pool: PgPool) -> AppState {
    AppState::postgres(pool, false)
}

/// Every route the service exposes, with a mocked peer address.
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .merge(api_routes(TEST_UPLOAD_LIMIT))
        .layer(MockConnectInfoLayer)
        .with_state(state)
}

pub fn create_test_server(state: AppState) -> TestServer {
    TestServer::new(create_app(state)).unwrap()
}

pub fn memory_server() -> TestServer {
    create_test_server(create_memory_state())
}
