//! Newtype ID for type-safe item references.
//!
//! Catalog ids are caller-defined strings (the fixture uses `"0"`, `"1"`,
//! ...), so the wrapper holds a `String` rather than an integer. Using a
//! newtype keeps item ids from being mixed up with other string fields.

use serde::{Deserialize, Serialize};

/// Identifier of a catalog item, also used as the cart map key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Create a new ID from a string value.
    #[must_use]
    pub const fn new(id: String) -> Self {
        Self(id)
    }

    /// Get the underlying string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ItemId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<ItemId> for String {
    fn from(id: ItemId) -> Self {
        id.0
    }
}
