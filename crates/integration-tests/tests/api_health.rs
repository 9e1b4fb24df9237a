//! Integration tests for the health endpoint and path normalization.

use axum::http::{Method, StatusCode};
use serde_json::json;

use emporio_integration_tests::{app, send};

#[tokio::test]
async fn test_health_reports_running() {
    let (status, body) = send(app(), Method::GET, "/health/", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "API is running"}));
}

#[tokio::test]
async fn test_trailing_slash_and_bare_path_hit_the_same_handler() {
    let (with_slash, body_a) = send(app(), Method::GET, "/health/", None).await;
    let (without_slash, body_b) = send(app(), Method::GET, "/health", None).await;

    assert_eq!(with_slash, StatusCode::OK);
    assert_eq!(without_slash, StatusCode::OK);
    assert_eq!(body_a, body_b);
}

#[tokio::test]
async fn test_unknown_path_is_404() {
    let (status, _) = send(app(), Method::GET, "/nope/", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
