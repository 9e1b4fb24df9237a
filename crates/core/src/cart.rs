//! Shared in-memory cart store.
//!
//! The cart is a single map from item id to cart line, shared by every
//! request handler for the lifetime of the process. It is never persisted.
//! Each operation takes the mutex exactly once, so concurrent requests see
//! either the state before or after a mutation, never a partial write.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use thiserror::Error;

use crate::types::{CartLine, ItemId};

/// Cart store errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartError {
    /// No line with the given id exists in the cart.
    #[error("no cart line with id {0}")]
    NotFound(ItemId),
}

/// Mutable mapping from item id to cart line.
///
/// At most one line per id; inserting with an existing id replaces the line
/// entirely. Created empty at process start and owned by the application
/// state rather than a module-level global.
#[derive(Debug, Default)]
pub struct CartStore {
    lines: Mutex<HashMap<ItemId, CartLine>>,
}

impl CartStore {
    /// Create an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or fully replace the line at `line.id` (last write wins, no
    /// quantity merge). Returns the resulting cart contents.
    pub fn upsert(&self, line: CartLine) -> Vec<CartLine> {
        let mut lines = self.lock();
        lines.insert(line.id.clone(), line);
        lines.values().cloned().collect()
    }

    /// Delete the line with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::NotFound`] if no line has that id; the cart is
    /// left unchanged.
    pub fn remove(&self, id: &ItemId) -> Result<Vec<CartLine>, CartError> {
        let mut lines = self.lock();
        if lines.remove(id).is_none() {
            return Err(CartError::NotFound(id.clone()));
        }
        Ok(lines.values().cloned().collect())
    }

    /// All current cart lines. Iteration order is unspecified.
    #[must_use]
    pub fn list(&self) -> Vec<CartLine> {
        self.lock().values().cloned().collect()
    }

    /// Empty the cart unconditionally. Always succeeds; idempotent.
    pub fn clear(&self) {
        self.lock().clear();
    }

    /// Take the cart lock, recovering from poisoning.
    ///
    /// Every mutation is a single `HashMap` call, so a panicking holder
    /// cannot leave the map half-updated.
    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<ItemId, CartLine>> {
        self.lines.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn line(id: &str, qty: u32) -> CartLine {
        CartLine {
            id: ItemId::from(id),
            name: format!("item {id}"),
            price: dec!(31.90),
            qty,
            image: format!("assets/{id}.png"),
        }
    }

    #[test]
    fn test_upsert_then_list_round_trip() {
        let store = CartStore::new();
        let added = line("1", 2);
        store.upsert(added.clone());

        let listed = store.list();
        assert_eq!(listed, vec![added]);
    }

    #[test]
    fn test_upsert_replaces_existing_line_entirely() {
        let store = CartStore::new();
        store.upsert(line("1", 2));

        let mut replacement = line("1", 5);
        replacement.price = dec!(29.00);
        store.upsert(replacement.clone());

        let cart = store.list();
        assert_eq!(cart.len(), 1);
        // qty 5, not 7: replace semantics, never an additive merge
        assert_eq!(cart.first(), Some(&replacement));
    }

    #[test]
    fn test_remove_existing_line() {
        let store = CartStore::new();
        store.upsert(line("1", 1));
        store.upsert(line("2", 1));

        let cart = store.remove(&ItemId::from("1")).unwrap();
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.first().map(|l| l.id.as_str()), Some("2"));
    }

    #[test]
    fn test_remove_missing_line_is_not_found_and_leaves_cart_unchanged() {
        let store = CartStore::new();
        store.upsert(line("1", 1));

        let err = store.remove(&ItemId::from("99")).unwrap_err();
        assert_eq!(err, CartError::NotFound(ItemId::from("99")));
        assert_eq!(store.list().len(), 1);
    }

    #[test]
    fn test_clear_is_idempotent() {
        let store = CartStore::new();
        store.upsert(line("1", 3));

        store.clear();
        assert!(store.list().is_empty());

        // Clearing an already empty cart still succeeds
        store.clear();
        store.clear();
        assert!(store.list().is_empty());
    }

    #[test]
    fn test_concurrent_upserts_to_same_id_serialize() {
        use std::sync::Arc;

        let store = Arc::new(CartStore::new());
        let handles: Vec<_> = (1..=8u32)
            .map(|qty| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    store.upsert(line("1", qty));
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        // Last committed write wins; exactly one line survives
        let cart = store.list();
        assert_eq!(cart.len(), 1);
        let qty = cart.first().map(|l| l.qty).unwrap();
        assert!((1..=8).contains(&qty));
    }
}
