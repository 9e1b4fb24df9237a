//! Cart line and order request types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ItemId;

/// One entry in the shopping cart, keyed by item id.
///
/// Carries its own name/price/image snapshot so the cart stays renderable
/// without a catalog lookup. Inserting a line for an id that already exists
/// replaces the stored line entirely (no quantity merge).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub id: ItemId,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub qty: u32,
    pub image: String,
}

/// A client-submitted snapshot of cart lines to turn into an order message.
///
/// Supplied by the caller and may differ from the server-side cart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderRequest {
    pub items: Vec<CartLine>,
}
