//! Catalog storage for the Luxe Furniture catalog.
//!
//! The store owns the authoritative, ordered list of [`FurnitureItem`]
//! records for the lifetime of the process. Clients only ever hold
//! snapshots and re-fetch the full list after a mutation.
//!
//! # Storage Backends
//!
//! All backends implement the [`CatalogStore`] trait:
//!
//! - [`InMemoryCatalogStore`] -- `Vec`-based store behind a single lock
//!
//! # Design Rules
//!
//! 1. Ids are store-assigned and immutable.
//! 2. Each operation is one atomic step under the store's lock.
//! 3. Update of an unknown id is `NotFound`; delete of an unknown id is a no-op.
//! 4. Nothing is persisted; state is lost on restart.
//!
//! [`FurnitureItem`]: luxe_types::FurnitureItem

pub mod error;
pub mod memory;
pub mod seed;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use memory::InMemoryCatalogStore;
pub use seed::sample_catalog;
pub use traits::CatalogStore;
