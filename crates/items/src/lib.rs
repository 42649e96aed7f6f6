//! Items domain module.
//!
//! This crate contains the catalog item model and its validation rules,
//! implemented purely as deterministic domain logic (no IO, no HTTP, no storage).

pub mod item;
pub mod messages;
pub mod rules;

pub use item::{Item, ItemPayload, OBJECT_NAME, fields};
pub use messages::MessageCatalog;
pub use rules::{ItemValidator, RuleSet, RuleSetConfig, validate};
