//! Catalog route handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use tracing::instrument;

use emporio_core::{CatalogItem, ItemId};

use crate::error::{AppError, Result};
use crate::state::AppState;

/// List the whole catalog, in definition order.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Json<Vec<CatalogItem>> {
    Json(state.catalog().items().to_vec())
}

/// Fetch a single catalog item by id.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<ItemId>,
) -> Result<Json<CatalogItem>> {
    state
        .catalog()
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or(AppError::ItemNotFound)
}
