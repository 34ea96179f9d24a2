mod common;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_shorten_assigns_sequential_codes() {
    let server = common::memory_server();

    let first = server
        .post("/api/shorturl")
        .json(&json!({ "url": "https://example.com/a" }))
        .await;
    first.assert_status_ok();
    first.assert_json(&json!({
        "original_url": "https://example.com/a",
        "short_url": 1
    }));

    let second = server
        .post("/api/shorturl")
        .json(&json!({ "url": "https://example.com/b" }))
        .await;
    second.assert_status_ok();
    assert_eq!(second.json::<serde_json::Value>()["short_url"], 2);
}

#[tokio::test]
async fn test_shorten_is_idempotent() {
    let server = common::memory_server();

    let first = server
        .post("/api/shorturl")
        .json(&json!({ "url": "https://dedup.com" }))
        .await;
    let second = server
        .post("/api/shorturl")
        .json(&json!({ "url": "https://dedup.com" }))
        .await;

    let code1 = first.json::<serde_json::Value>()["short_url"].clone();
    let code2 = second.json::<serde_json::Value>()["short_url"].clone();
    assert_eq!(code1, code2);

    let next = server
        .post("/api/shorturl")
        .json(&json!({ "url": "https://other.com" }))
        .await;
    assert_eq!(next.json::<serde_json::Value>()["short_url"], 2);
}

#[tokio::test]
async fn test_shorten_accepts_form_body() {
    let server = common::memory_server();

    let response = server
        .post("/api/shorturl")
        .form(&[("url", "https://www.freecodecamp.org")])
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({
        "original_url": "https://www.freecodecamp.org",
        "short_url": 1
    }));
}

#[tokio::test]
async fn test_shorten_rejects_invalid_url() {
    let server = common::memory_server();

    for url in ["not a url", "ftp://example.com", "https://"] {
        let response = server
            .post("/api/shorturl")
            .json(&json!({ "url": url }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        response.assert_json(&json!({ "error": "invalid url" }));
    }

    let ok = server
        .post("/api/shorturl")
        .json(&json!({ "url": "https://example.com" }))
        .await;
    assert_eq!(ok.json::<serde_json::Value>()["short_url"], 1);
}

#[tokio::test]
async fn test_shorten_requires_url() {
    let server = common::memory_server();

    let response = server.post("/api/shorturl").json(&json!({})).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({ "error": "URL is required." }));

    let blank = server
        .post("/api/shorturl")
        .json(&json!({ "url": "   " }))
        .await;
    blank.assert_json(&json!({ "error": "URL is required." }));
}

#[tokio::test]
async fn test_redirect_to_original_url() {
    let server = common::memory_server();

    server
        .post("/api/shorturl")
        .json(&json!({ "url": "https://example.com/a" }))
        .await
        .assert_status_ok();

    let response = server.get("/api/shorturl/1").await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://example.com/a");
}

#[tokio::test]
async fn test_redirect_reads_leading_digits() {
    let server = common::memory_server();

    server
        .post("/api/shorturl")
        .json(&json!({ "url": "https://example.com/a" }))
        .await
        .assert_status_ok();

    for path in ["/api/shorturl/1abc", "/api/shorturl/1.5", "/api/shorturl/1e3"] {
        let response = server.get(path).await;

        assert_eq!(response.status_code(), 302);
        assert_eq!(response.header("location"), "https://example.com/a");
    }
}

#[tokio::test]
async fn test_shorten_echoes_trimmed_url() {
    let server = common::memory_server();

    let padded = server
        .post("/api/shorturl")
        .json(&json!({ "url": "  https://example.com/a  " }))
        .await;
    padded.assert_status_ok();
    padded.assert_json(&json!({
        "original_url": "https://example.com/a",
        "short_url": 1
    }));

    let plain = server
        .post("/api/shorturl")
        .json(&json!({ "url": "https://example.com/a" }))
        .await;
    assert_eq!(plain.json::<serde_json::Value>()["short_url"], 1);
}

#[tokio::test]
async fn test_redirect_invalid_code() {
    let server = common::memory_server();

    let response = server.get("/api/shorturl/abc").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({ "error": "No short URL found for the given input." }));
}

#[tokio::test]
async fn test_redirect_unknown_code() {
    let server = common::memory_server();

    let response = server.get("/api/shorturl/999999").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({ "error": "No short URL found for the given input." }));
}

#[tokio::test]
async fn test_concurrent_requests_share_one_code() {
    let server = common::memory_server();

    let shorten = || async {
        server
            .post("/api/shorturl")
            .json(&json!({ "url": "https://race.example.com" }))
            .await
    };
    let (a, b) = tokio::join!(shorten(), shorten());

    assert_eq!(
        a.json::<serde_json::Value>()["short_url"],
        b.json::<serde_json::Value>()["short_url"]
    );

    let next = server
        .post("/api/shorturl")
        .json(&json!({ "url": "https://next.example.com" }))
        .await;
    assert_eq!(next.json::<serde_json::Value>()["short_url"], 2);
}
