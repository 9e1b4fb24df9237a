//! Integration tests for Empório.
//!
//! The tests drive the full application service in-process with
//! `tower::ServiceExt::oneshot` - no listening socket and nothing external
//! to stand up. Each test builds a fresh app, so the shared cart always
//! starts empty.
//!
//! # Test Categories
//!
//! - `api_items` - Catalog endpoints
//! - `api_cart` - Cart endpoints (replace semantics, clear idempotence)
//! - `api_order` - Order composition and the WhatsApp deep link
//! - `api_health` - Health check and trailing-slash normalization

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use tower::ServiceExt;
use tower_http::normalize_path::NormalizePath;

use emporio_api::config::ApiConfig;
use emporio_api::state::AppState;
use emporio_core::{Catalog, CatalogItem, ItemId};

/// Phone number baked into the test configuration.
pub const TEST_PHONE: &str = "5537991243408";

/// A small catalog in the fixture's shape.
#[must_use]
pub fn sample_catalog() -> Catalog {
    let items = vec![
        catalog_item("0", "QUEIJO PALITO", "31.90"),
        catalog_item("1", "QUEIJO TRANÇA", "31.90"),
        catalog_item("3", "KIT TRANÇA", "29.00"),
    ];
    Catalog::new(items)
}

fn catalog_item(id: &str, name: &str, price: &str) -> CatalogItem {
    CatalogItem {
        id: ItemId::from(id),
        name: name.to_string(),
        price: price.parse().unwrap_or_default(),
        details: "450g - artesanal".to_string(),
        image: format!("assets/imagens/foto{id}.png"),
        category: "Queijos Tradicionais".to_string(),
    }
}

/// Configuration for tests; never reads the environment.
#[must_use]
pub fn sample_config() -> ApiConfig {
    ApiConfig {
        host: std::net::IpAddr::V4(std::net::Ipv4Addr::LOCALHOST),
        port: 0,
        catalog_path: "unused".into(),
        whatsapp_phone: TEST_PHONE.to_string(),
        frontend_origin: "http://localhost:8080".to_string(),
        sentry_dsn: None,
        sentry_environment: None,
    }
}

/// Build a fresh application service with the sample catalog and an empty
/// cart.
#[must_use]
pub fn app() -> NormalizePath<Router> {
    emporio_api::app(AppState::new(sample_config(), sample_catalog()))
}

/// Send one request to the app and return status plus parsed JSON body.
///
/// # Panics
///
/// Panics if the request cannot be built or the response body is not JSON;
/// both indicate a broken test, not a server behavior under test.
pub async fn send(
    app: NormalizePath<Router>,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let request = match body {
        Some(json) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => Request::builder().method(method).uri(uri).body(Body::empty()),
    }
    .expect("failed to build request");

    let response = app.oneshot(request).await.expect("request failed");
    let status = response.status();

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read body");
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("response body is not JSON")
    };

    (status, json)
}
