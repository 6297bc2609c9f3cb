use luxe_types::ItemId;

/// Errors from catalog store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No record with this id.
    #[error("item not found: {0}")]
    NotFound(ItemId),

    /// A writer panicked while holding the catalog lock.
    #[error("catalog lock poisoned")]
    Poisoned,
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
