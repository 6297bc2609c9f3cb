//! HTTP server for the Luxe Furniture catalog.
//!
//! Exposes the catalog store over one resource path, `/api/furniture`:
//! `GET` lists, `POST` creates, `PUT` updates and `DELETE ?id=` removes.

pub mod config;
pub mod error;
pub mod handler;
pub mod router;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ErrorBody, ServerError, ServerResult};
pub use handler::{DeleteResponse, HealthResponse};
pub use router::{build_router, FURNITURE_PATH};
pub use server::LuxeServer;
pub use state::AppState;
