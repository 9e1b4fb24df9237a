//! Core types for Empório.
//!
//! This module provides the typed structures exchanged at the API boundary.

pub mod cart;
pub mod id;
pub mod item;

pub use cart::{CartLine, OrderRequest};
pub use id::ItemId;
pub use item::CatalogItem;
