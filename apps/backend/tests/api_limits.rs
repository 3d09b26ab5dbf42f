//! Rate limiting and error log API tests.

mod common;

use axum::http::StatusCode;
use chrono::TimeDelta;
use serde_json::json;

use common::fixtures;
use common::TestContext;

fn similarity_request() -> serde_json::Value {
    json!({ "student_answer": "gato", "correct_answer": "gato" })
}

/// Test requests beyond the limit get 429 with Retry-After.
#[tokio::test]
async fn test_rate_limit_exceeded() {
    let ctx = TestContext::with_rate_limit(2, 30);
    let server = ctx.server();
    let (name, value) = TestContext::client_header("client-a");

    for _ in 0..2 {
        server
            .post("/api/grading/similarity")
            .add_header(name.clone(), value.clone())
            .json(&similarity_request())
            .await
            .assert_status_ok();
    }

    let response = server
        .post("/api/grading/similarity")
        .add_header(name.clone(), value.clone())
        .json(&similarity_request())
        .await;

    response.assert_status(StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(response.header("retry-after"), "30");
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "rate_limited");
}

/// Test allowed responses report the requests left.
#[tokio::test]
async fn test_rate_limit_remaining_header() {
    let ctx = TestContext::with_rate_limit(3, 60);
    let server = ctx.server();

    let first = server
        .post("/api/grading/similarity")
        .json(&similarity_request())
        .await;
    first.assert_status_ok();
    assert_eq!(first.header("x-ratelimit-remaining"), "2");

    let second = server
        .post("/api/grading/similarity")
        .json(&similarity_request())
        .await;
    assert_eq!(second.header("x-ratelimit-remaining"), "1");
}

/// Test limits are tracked per client id.
#[tokio::test]
async fn test_rate_limit_per_client() {
    let ctx = TestContext::with_rate_limit(1, 60);
    let server = ctx.server();
    let (name, first) = TestContext::client_header("client-a");
    let (_, second) = TestContext::client_header("client-b");

    server
        .post("/api/grading/similarity")
        .add_header(name.clone(), first.clone())
        .json(&similarity_request())
        .await
        .assert_status_ok();

    server
        .post("/api/grading/similarity")
        .add_header(name.clone(), second)
        .json(&similarity_request())
        .await
        .assert_status_ok();

    server
        .post("/api/grading/similarity")
        .add_header(name, first)
        .json(&similarity_request())
        .await
        .assert_status(StatusCode::TOO_MANY_REQUESTS);
}

/// Test the limit resets when the window passes.
#[tokio::test]
async fn test_rate_limit_window_resets() {
    let ctx = TestContext::with_rate_limit(1, 60);
    let server = ctx.server();

    server
        .post("/api/grading/similarity")
        .json(&similarity_request())
        .await
        .assert_status_ok();
    server
        .post("/api/grading/similarity")
        .json(&similarity_request())
        .await
        .assert_status(StatusCode::TOO_MANY_REQUESTS);

    ctx.clock.advance(TimeDelta::seconds(60));

    server
        .post("/api/grading/similarity")
        .json(&similarity_request())
        .await
        .assert_status_ok();
}

/// Test health and admin routes are not rate limited.
#[tokio::test]
async fn test_health_not_limited() {
    let ctx = TestContext::with_rate_limit(1, 60);
    let server = ctx.server();

    for _ in 0..3 {
        server.get("/health").await.assert_status_ok();
    }
}

/// Test failed requests show up in the error log.
#[tokio::test]
async fn test_error_log_records_failures() {
    let ctx = TestContext::with_rate_limit(1, 60);
    let server = ctx.server();

    server
        .post("/api/grading/check")
        .json(&fixtures::check_request("x", json!(null)))
        .await
        .assert_status(StatusCode::BAD_REQUEST);
    server
        .post("/api/grading/check")
        .json(&fixtures::check_request("x", json!("x")))
        .await
        .assert_status(StatusCode::TOO_MANY_REQUESTS);

    let response = server.get("/api/admin/errors").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    let errors = body["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0]["path"], "/api/grading/check");
    assert_eq!(errors[0]["status"], 400);
    assert_eq!(errors[0]["method"], "POST");
    assert_eq!(errors[1]["status"], 429);
}

/// Test successful requests are not logged.
#[tokio::test]
async fn test_error_log_ignores_success() {
    let ctx = TestContext::new();
    let server = ctx.server();

    server.get("/health").await.assert_status_ok();

    assert!(ctx.state.errors.recent().is_empty());
}
