use std::sync::Arc;

use itemservice_core::{DomainResult, ItemId};
use itemservice_items::{Item, ItemPayload};

/// Create/read/update access to catalog items.
///
/// Implementations must make each call atomic: concurrent `save`s never share
/// an id, and readers never observe a half-applied `update`.
pub trait ItemStore: Send + Sync {
    /// All items in insertion order.
    fn find_all(&self) -> Vec<Item>;

    /// The item with `id`, or `DomainError::NotFound`.
    fn find_by_id(&self, id: ItemId) -> DomainResult<Item>;

    /// Store `payload` under the next identifier and return the stored item.
    fn save(&self, payload: ItemPayload) -> Item;

    /// Replace name/price/quantity of an existing item, keeping its id.
    fn update(&self, id: ItemId, payload: ItemPayload) -> DomainResult<Item>;
}

impl<S> ItemStore for Arc<S>
where
    S: ItemStore + ?Sized,
{
    fn find_all(&self) -> Vec<Item> {
        (**self).find_all()
    }

    fn find_by_id(&self, id: ItemId) -> DomainResult<Item> {
        (**self).find_by_id(id)
    }

    fn save(&self, payload: ItemPayload) -> Item {
        (**self).save(payload)
    }

    fn update(&self, id: ItemId, payload: ItemPayload) -> DomainResult<Item> {
        (**self).update(id, payload)
    }
}
