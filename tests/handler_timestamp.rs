mod common;

use axum::http::StatusCode;
use chrono::Utc;
use serde_json::json;

#[tokio::test]
async fn test_date_string() {
    let server = common::memory_server();

    let response = server.get("/api/2015-12-25").await;

    response.assert_status_ok();
    response.assert_json(&json!({
        "unix": 1451001600000_i64,
        "utc": "Fri, 25 Dec 2015 00:00:00 GMT"
    }));
}

#[tokio::test]
async fn test_unix_milliseconds() {
    let server = common::memory_server();

    let response = server.get("/api/1451001600000").await;

    response.assert_status_ok();
    response.assert_json(&json!({
        "unix": 1451001600000_i64,
        "utc": "Fri, 25 Dec 2015 00:00:00 GMT"
    }));
}

#[tokio::test]
async fn test_rfc3339_with_offset() {
    let server = common::memory_server();

    let response = server.get("/api/2015-12-25T02:00:00+02:00").await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["unix"], 1451001600000_i64);
}

#[tokio::test]
async fn test_invalid_date() {
    let server = common::memory_server();

    for input in ["this-is-not-a-date", "2015-13-45", "8640000000000001"] {
        let response = server.get(&format!("/api/{input}")).await;

        response.assert_status(StatusCode::BAD_REQUEST);
        response.assert_json(&json!({ "error": "Invalid Date" }));
    }
}

#[tokio::test]
async fn test_empty_date_is_now() {
    let server = common::memory_server();
    let before = Utc::now().timestamp_millis();

    let response = server.get("/api").await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    let unix = json["unix"].as_i64().unwrap();
    assert!(unix >= before);
    assert!(unix <= Utc::now().timestamp_millis());
    assert!(json["utc"].as_str().unwrap().ends_with("GMT"));
}
