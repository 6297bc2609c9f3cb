use std::future::Future;
use std::sync::Arc;

use tokio::net::TcpListener;

use luxe_store::{CatalogStore, InMemoryCatalogStore};

use crate::config::ServerConfig;
use crate::error::ServerResult;
use crate::router::build_router;
use crate::state::AppState;

/// Catalog server. Owns the store for the lifetime of the process.
pub struct LuxeServer {
    config: ServerConfig,
    store: Arc<dyn CatalogStore>,
}

impl LuxeServer {
    /// Server backed by a fresh in-memory store, seeded if configured.
    pub fn new(config: ServerConfig) -> Self {
        let store = if config.seed_catalog {
            InMemoryCatalogStore::seeded()
        } else {
            InMemoryCatalogStore::new()
        };
        Self::with_store(config, Arc::new(store))
    }

    pub fn with_store(config: ServerConfig, store: Arc<dyn CatalogStore>) -> Self {
        Self { config, store }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    pub fn store(&self) -> &Arc<dyn CatalogStore> {
        &self.store
    }

    /// Build the router (useful for testing).
    pub fn router(&self) -> axum::Router {
        build_router(AppState::new(Arc::clone(&self.store)), &self.config)
    }

    /// Start serving requests until the process is killed.
    pub async fn serve(self) -> ServerResult<()> {
        self.serve_with_shutdown(std::future::pending::<()>()).await
    }

    /// Start serving requests; stop accepting once `shutdown` resolves and
    /// return after in-flight requests finish.
    pub async fn serve_with_shutdown(
        self,
        shutdown: impl Future<Output = ()> + Send + 'static,
    ) -> ServerResult<()> {
        let app = self.router();
        let listener = TcpListener::bind(&self.config.bind_addr).await?;
        tracing::info!("Luxe catalog server listening on {}", listener.local_addr()?);
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await?;
        tracing::info!("Luxe catalog server stopped");
        Ok(())
    }
}
