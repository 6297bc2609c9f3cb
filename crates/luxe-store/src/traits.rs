use luxe_types::{FurnitureItem, ItemId, ItemUpdate, NewItem};

use crate::error::StoreResult;

/// Authoritative, ordered collection of catalog records.
///
/// All implementations must satisfy these invariants:
/// - Ids are assigned by the store on create and are unique for the
///   store's lifetime.
/// - A record's id never changes after creation.
/// - Every operation is atomic: no caller observes a half-applied update.
/// - Records are returned in insertion order.
pub trait CatalogStore: Send + Sync {
    /// Every record, in insertion order.
    fn list_all(&self) -> StoreResult<Vec<FurnitureItem>>;

    /// Assign a fresh id, append the record and return it as stored.
    fn create(&self, item: NewItem) -> StoreResult<FurnitureItem>;

    /// Patch the record with `id` and return it as stored.
    ///
    /// Returns `StoreError::NotFound` if no record has this id, in which
    /// case the store is left unchanged. `update.id` is ignored.
    fn update(&self, id: &ItemId, update: ItemUpdate) -> StoreResult<FurnitureItem>;

    /// Remove the record with `id`. Returns `true` if it existed.
    ///
    /// Deleting an unknown id is a no-op, not an error.
    fn delete(&self, id: &ItemId) -> StoreResult<bool>;
}
