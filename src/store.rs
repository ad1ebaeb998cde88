//! In-process item store.

use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use crate::error::StoreError;
use crate::item::Item;

/// Authoritative set of items keyed by `id`.
///
/// Cloning yields another handle to the same map. Every check-then-act
/// operation runs under the key's shard lock, so concurrent requests never
/// observe a half-applied mutation.
#[derive(Debug, Clone, Default)]
pub struct ItemStore {
    items: Arc<DashMap<i64, Item>>,
}

impl ItemStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether `id` is a key.
    pub fn exists(&self, id: i64) -> bool {
        self.items.contains_key(&id)
    }

    /// Get a copy of the item stored under `id`.
    pub fn get(&self, id: i64) -> Option<Item> {
        self.items.get(&id).map(|item| item.value().clone())
    }

    /// Store a new item under its own id.
    pub fn insert(&self, item: Item) -> Result<(), StoreError> {
        match self.items.entry(item.id) {
            Entry::Occupied(_) => Err(StoreError::AlreadyExists { id: item.id }),
            Entry::Vacant(slot) => {
                slot.insert(item);
                Ok(())
            }
        }
    }

    /// Overwrite the item stored under `id`.
    ///
    /// The replacement must carry the same id as the key, so a stored item's
    /// `id` always equals its key.
    pub fn replace(&self, id: i64, item: Item) -> Result<(), StoreError> {
        let Some(mut slot) = self.items.get_mut(&id) else {
            return Err(StoreError::NotFound { id });
        };

        if item.id != id {
            return Err(StoreError::IdMismatch {
                path_id: id,
                body_id: item.id,
            });
        }

        *slot = item;
        Ok(())
    }

    /// Remove and return the item stored under `id`.
    pub fn remove(&self, id: i64) -> Result<Item, StoreError> {
        self.items
            .remove(&id)
            .map(|(_, item)| item)
            .ok_or(StoreError::NotFound { id })
    }

    /// Number of stored items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Stored ids in ascending order.
    pub fn ids(&self) -> Vec<i64> {
        let mut ids: Vec<i64> = self.items.iter().map(|entry| *entry.key()).collect();
        ids.sort_unstable();
        ids
    }
}
