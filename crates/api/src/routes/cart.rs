//! Cart route handlers.
//!
//! The cart is a single shared resource (no session key); every client sees
//! the same contents. Mutating endpoints return the resulting cart so the
//! frontend can re-render without a second round trip.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;
use tracing::instrument;

use emporio_core::{CartLine, ItemId};

use crate::error::Result;
use crate::state::AppState;

/// Response for cart mutations: a status message plus the resulting cart.
#[derive(Debug, Serialize)]
pub struct CartResponse {
    pub message: String,
    pub cart: Vec<CartLine>,
}

/// Response for clearing the cart.
#[derive(Debug, Serialize)]
pub struct ClearResponse {
    pub message: String,
}

/// List the current cart contents.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Json<Vec<CartLine>> {
    Json(state.cart().list())
}

/// Add a line to the cart, or fully replace the line with the same id.
#[instrument(skip(state, line), fields(item_id = %line.id))]
pub async fn upsert(
    State(state): State<AppState>,
    Json(line): Json<CartLine>,
) -> Json<CartResponse> {
    let cart = state.cart().upsert(line);
    Json(CartResponse {
        message: "Item adicionado ao carrinho".to_string(),
        cart,
    })
}

/// Remove the line with the given id from the cart.
#[instrument(skip(state))]
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<ItemId>,
) -> Result<Json<CartResponse>> {
    let cart = state.cart().remove(&id)?;
    Ok(Json(CartResponse {
        message: "Item removido do carrinho".to_string(),
        cart,
    }))
}

/// Empty the cart. Idempotent: clearing an empty cart still succeeds.
#[instrument(skip(state))]
pub async fn clear(State(state): State<AppState>) -> Json<ClearResponse> {
    state.cart().clear();
    Json(ClearResponse {
        message: "Carrinho limpo".to_string(),
    })
}
