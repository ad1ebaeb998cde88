//! Item operations against an explicit store handle.
//!
//! Each function depends only on its input and the store it is given.

use tracing::{debug, info};

use super::types::Item;
use crate::error::StoreError;
use crate::store::ItemStore;

/// Store a new item and return it.
pub fn create_item(store: &ItemStore, item: Item) -> Result<Item, StoreError> {
    store.insert(item.clone())?;
    info!("Created item {}", item.id);
    Ok(item)
}

/// Fetch the item stored under `id`.
pub fn get_item(store: &ItemStore, id: i64) -> Result<Item, StoreError> {
    let item = store.get(id).ok_or(StoreError::NotFound { id })?;
    debug!("Fetched item {}", id);
    Ok(item)
}

/// Replace the item stored under `id` and return the replacement.
pub fn update_item(store: &ItemStore, id: i64, item: Item) -> Result<Item, StoreError> {
    store.replace(id, item.clone())?;
    info!("Updated item {}", id);
    Ok(item)
}

/// Remove the item stored under `id`, returning the confirmation text.
pub fn delete_item(store: &ItemStore, id: i64) -> Result<String, StoreError> {
    store.remove(id)?;
    info!("Deleted item {}", id);
    Ok(format!("Item {id} deleted successfully"))
}
