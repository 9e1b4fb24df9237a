//! Empório API library.
//!
//! This crate provides the storefront API as a library, allowing the full
//! router to be driven in-process by the integration tests.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use axum::{Router, http::HeaderValue};
use tower::Layer as _;
use tower_http::{
    cors::{AllowHeaders, AllowMethods, CorsLayer},
    normalize_path::{NormalizePath, NormalizePathLayer},
    trace::TraceLayer,
};

use state::AppState;

/// Build the complete application service.
///
/// The router is wrapped in a trailing-slash normalizer so the original
/// frontend's paths (`/items/`, `/cart/`, ...) resolve to the same handlers
/// as their slash-less forms. Normalization must wrap the router itself;
/// applied as an inner layer it would run after routing.
#[must_use]
pub fn app(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .merge(routes::routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(state.config()))
        .with_state(state)
        // Sentry layers (outermost for full request coverage)
        .layer(sentry_tower::NewSentryLayer::new_from_top())
        .layer(sentry_tower::SentryHttpLayer::new().enable_transaction());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}

/// CORS restricted to the single configured frontend origin.
///
/// Credentials are allowed, so methods and headers mirror the request
/// instead of using wildcards (wildcards and credentials are mutually
/// exclusive).
fn cors_layer(config: &config::ApiConfig) -> CorsLayer {
    let origin = HeaderValue::from_str(&config.frontend_origin).unwrap_or_else(|_| {
        tracing::warn!(
            origin = %config.frontend_origin,
            "Invalid frontend origin, falling back to http://localhost:8080"
        );
        HeaderValue::from_static("http://localhost:8080")
    });

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}
