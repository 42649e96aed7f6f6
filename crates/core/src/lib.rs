//! `itemservice-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! identifiers, the entity trait, validation violations, and the error model.

pub mod entity;
pub mod error;
pub mod id;
pub mod violation;

pub use entity::Entity;
pub use error::{BindingFailure, DomainError, DomainResult};
pub use id::ItemId;
pub use violation::{Violation, ViolationCode, Violations};
