mod common;

use backend_microservices::state::AppState;
use serde_json::json;

#[tokio::test]
async fn test_whoami_reports_headers_and_peer() {
    let server = common::memory_server();

    let response = server
        .get("/api/whoami")
        .add_header("Accept-Language", "en-US,en;q=0.5")
        .add_header("User-Agent", "Mozilla/5.0 (test)")
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({
        "ipaddress": "127.0.0.1",
        "language": "en-US,en;q=0.5",
        "software": "Mozilla/5.0 (test)"
    }));
}

#[tokio::test]
async fn test_whoami_missing_headers_are_empty() {
    let server = common::memory_server();

    let response = server.get("/api/whoami").await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["language"], "");
    assert_eq!(json["ipaddress"], "127.0.0.1");
}

#[tokio::test]
async fn test_forwarded_for_ignored_without_proxy() {
    let server = common::memory_server();

    let response = server
        .get("/api/whoami")
        .add_header("X-Forwarded-For", "203.0.113.7")
        .await;

    assert_eq!(response.json::<serde_json::Value>()["ipaddress"], "127.0.0.1");
}

#[tokio::test]
async fn test_forwarded_for_used_behind_proxy() {
    let server = common::create_test_server(AppState::in_memory(true));

    let response = server
        .get("/api/whoami")
        .add_header("X-Forwarded-For", "203.0.113.7, 10.0.0.1")
        .await;

    assert_eq!(response.json::<serde_json::Value>()["ipaddress"], "203.0.113.7");
}
