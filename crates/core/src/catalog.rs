//! Read-only catalog of purchasable items.
//!
//! The catalog is built once at startup from an external fixture and never
//! mutated afterwards. Lookup is a linear scan: the catalog is small and
//! static, so an index buys nothing.

use crate::types::{CatalogItem, ItemId};

/// The static, read-only set of purchasable items.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    /// Build a catalog from a list of items, preserving definition order.
    #[must_use]
    pub const fn new(items: Vec<CatalogItem>) -> Self {
        Self { items }
    }

    /// All items, in fixed definition order. No pagination, no filtering.
    #[must_use]
    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    /// Look up an item by id. Returns `None` if no item has that id.
    #[must_use]
    pub fn get(&self, id: &ItemId) -> Option<&CatalogItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    /// Number of items in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the catalog holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
