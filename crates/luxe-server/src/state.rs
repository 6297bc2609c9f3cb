use std::sync::Arc;

use luxe_store::CatalogStore;

/// Shared state for request handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn CatalogStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self { store }
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}
