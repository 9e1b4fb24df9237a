//! HTTP route handlers for the storefront API.
//!
//! # Route Structure
//!
//! ```text
//! GET    /health          - Health check
//!
//! # Catalog
//! GET    /items           - List all catalog items
//! GET    /items/{id}      - Single catalog item
//!
//! # Cart (single shared cart)
//! GET    /cart            - Current cart contents
//! POST   /cart            - Add or replace a cart line
//! DELETE /cart            - Clear the cart
//! DELETE /cart/{id}       - Remove one cart line
//!
//! # Orders
//! POST   /order           - Compose WhatsApp order link
//! ```
//!
//! The original frontend calls every path with a trailing slash
//! (`/items/`, `/cart/`, ...); the normalize-path layer applied in
//! [`crate::app`] maps those onto the routes above.

pub mod cart;
pub mod items;
pub mod order;

use axum::{
    Json, Router,
    routing::{get, post},
};
use serde::Serialize;

use crate::state::AppState;

/// Health check response body.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Health check endpoint.
///
/// Returns a fixed body if the server is running. There are no
/// dependencies to probe: the catalog is in memory and the cart needs no
/// backing service.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "API is running",
    })
}

/// Create the catalog routes router.
pub fn item_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(items::index))
        .route("/{id}", get(items::show))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::index).post(cart::upsert).delete(cart::clear))
        .route("/{id}", axum::routing::delete(cart::remove))
}

/// Create all routes for the API.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Catalog routes
        .nest("/items", item_routes())
        // Cart routes
        .nest("/cart", cart_routes())
        // Order composition
        .route("/order", post(order::create))
        // Health check
        .route("/health", get(health))
}
