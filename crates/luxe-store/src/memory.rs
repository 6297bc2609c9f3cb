use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use luxe_types::{FurnitureItem, ItemId, ItemUpdate, NewItem};

use crate::error::{StoreError, StoreResult};
use crate::seed::sample_catalog;
use crate::traits::CatalogStore;

/// In-memory, `Vec`-backed catalog store.
///
/// The whole sequence sits behind one `RwLock`; every operation holds the
/// lock for its full read or write. Records are cloned on the way out.
pub struct InMemoryCatalogStore {
    items: RwLock<Vec<FurnitureItem>>,
}

impl InMemoryCatalogStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::with_items(Vec::new())
    }

    /// Create a store holding `items`, in order.
    pub fn with_items(items: Vec<FurnitureItem>) -> Self {
        Self {
            items: RwLock::new(items),
        }
    }

    /// Create a store holding the sample catalog.
    pub fn seeded() -> Self {
        Self::with_items(sample_catalog())
    }

    /// Number of records currently stored.
    pub fn len(&self) -> StoreResult<usize> {
        Ok(self.read()?.len())
    }

    /// Returns `true` if the store holds no records.
    pub fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.read()?.is_empty())
    }

    /// Remove every record.
    pub fn clear(&self) -> StoreResult<()> {
        self.write()?.clear();
        Ok(())
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, Vec<FurnitureItem>>> {
        self.items.read().map_err(|_| StoreError::Poisoned)
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, Vec<FurnitureItem>>> {
        self.items.write().map_err(|_| StoreError::Poisoned)
    }
}

impl Default for InMemoryCatalogStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogStore for InMemoryCatalogStore {
    fn list_all(&self) -> StoreResult<Vec<FurnitureItem>> {
        Ok(self.read()?.clone())
    }

    fn create(&self, item: NewItem) -> StoreResult<FurnitureItem> {
        let mut items = self.write()?;
        // Ids are unique within the store.
        let mut id = ItemId::generate();
        while items.iter().any(|existing| existing.id == id) {
            id = ItemId::generate();
        }
        let record = FurnitureItem::from_new(id, item);
        items.push(record.clone());
        tracing::debug!(id = %record.id, "catalog item created");
        Ok(record)
    }

    fn update(&self, id: &ItemId, update: ItemUpdate) -> StoreResult<FurnitureItem> {
        let mut items = self.write()?;
        let record = items
            .iter_mut()
            .find(|item| item.id == *id)
            .ok_or_else(|| StoreError::NotFound(id.clone()))?;
        record.apply(update);
        tracing::debug!(%id, "catalog item updated");
        Ok(record.clone())
    }

    fn delete(&self, id: &ItemId) -> StoreResult<bool> {
        let mut items = self.write()?;
        let before = items.len();
        items.retain(|item| item.id != *id);
        let removed = items.len() != before;
        tracing::debug!(%id, removed, "catalog item deleted");
        Ok(removed)
    }
}

impl std::fmt::Debug for InMemoryCatalogStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut s = f.debug_struct("InMemoryCatalogStore");
        match self.len() {
            Ok(count) => s.field("item_count", &count),
            Err(_) => s.field("item_count", &"<poisoned>"),
        };
        s.finish()
    }
}
