//! Empório Core - Shared types and domain logic.
//!
//! This crate provides the pieces common to all Empório components:
//! - `api` - JSON storefront API binary
//!
//! # Architecture
//!
//! The core crate contains only types and in-memory domain logic - no I/O,
//! no HTTP clients. This keeps it lightweight and allows it to be used
//! anywhere.
//!
//! # Modules
//!
//! - [`types`] - Catalog items, cart lines, and the `ItemId` newtype
//! - [`catalog`] - Read-only catalog with lookup by id
//! - [`cart`] - Shared mutable cart store
//! - [`order`] - WhatsApp order message composer

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod order;
pub mod types;

pub use cart::{CartError, CartStore};
pub use catalog::Catalog;
pub use order::{OrderError, compose_message, whatsapp_url};
pub use types::{CartLine, CatalogItem, ItemId, OrderRequest};
