//! Order route handlers.
//!
//! Submitting an order composes the WhatsApp message from the lines the
//! client sent (a snapshot, which may differ from the server-side cart) and
//! returns the `wa.me` deep link. The cart store is left untouched.

use axum::{Json, extract::State};
use serde::Serialize;
use tracing::instrument;

use emporio_core::{OrderRequest, compose_message, whatsapp_url};

use crate::error::Result;
use crate::state::AppState;

/// Response carrying the pre-filled WhatsApp deep link.
#[derive(Debug, Serialize)]
pub struct OrderResponse {
    pub whatsapp_url: String,
}

/// Compose an order message and return its WhatsApp deep link.
#[instrument(skip(state, order), fields(lines = order.items.len()))]
pub async fn create(
    State(state): State<AppState>,
    Json(order): Json<OrderRequest>,
) -> Result<Json<OrderResponse>> {
    let message = compose_message(&order.items)?;
    let url = whatsapp_url(&state.config().whatsapp_phone, &message);
    Ok(Json(OrderResponse { whatsapp_url: url }))
}
