//! Item repository boundary.
//!
//! Handlers depend on the `ItemStore` trait only; the process wires a concrete
//! implementation once at startup and passes it in explicitly.

pub mod in_memory;
pub mod r#trait;

pub use in_memory::InMemoryItemStore;
pub use r#trait::ItemStore;
