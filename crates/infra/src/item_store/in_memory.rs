use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use itemservice_core::{DomainError, DomainResult, Entity, ItemId};
use itemservice_items::{Item, ItemPayload};

use super::r#trait::ItemStore;

#[derive(Debug)]
struct StoreState {
    // Ids are assigned in increasing order, so key order is insertion order.
    items: BTreeMap<ItemId, Item>,
    next_id: ItemId,
}

/// In-memory item repository.
///
/// Process-lifetime only. One lock guards both the map and the id counter.
#[derive(Debug)]
pub struct InMemoryItemStore {
    inner: RwLock<StoreState>,
}

impl InMemoryItemStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(StoreState {
                items: BTreeMap::new(),
                next_id: ItemId::FIRST,
            }),
        }
    }

    /// Store pre-populated with the two demo rows (`itemA`, `itemB`).
    pub fn with_sample_data() -> Self {
        let store = Self::new();
        store.save(ItemPayload::new("itemA", 10_000, 10));
        store.save(ItemPayload::new("itemB", 20_000, 20));
        store
    }

    pub fn len(&self) -> usize {
        self.read().items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // Every mutation is a single insert or field assignment under the write
    // lock, so state behind a poisoned lock is still consistent.
    fn read(&self) -> RwLockReadGuard<'_, StoreState> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, StoreState> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for InMemoryItemStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemStore for InMemoryItemStore {
    fn find_all(&self) -> Vec<Item> {
        self.read().items.values().cloned().collect()
    }

    fn find_by_id(&self, id: ItemId) -> DomainResult<Item> {
        self.read()
            .items
            .get(&id)
            .cloned()
            .ok_or(DomainError::NotFound)
    }

    fn save(&self, payload: ItemPayload) -> Item {
        let mut state = self.write();
        let id = state.next_id;
        state.next_id = id.next();

        let item = Item::new(id, payload);
        state.items.insert(*item.id(), item.clone());
        tracing::debug!(item_id = %id, "item saved");
        item
    }

    fn update(&self, id: ItemId, payload: ItemPayload) -> DomainResult<Item> {
        let mut state = self.write();
        let item = state.items.get_mut(&id).ok_or(DomainError::NotFound)?;
        item.apply(payload);
        tracing::debug!(item_id = %id, "item updated");
        Ok(item.clone())
    }
}
