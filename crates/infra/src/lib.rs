//! Infrastructure layer: storage adapters behind domain-facing traits.

pub mod item_store;

pub use item_store::{InMemoryItemStore, ItemStore};
