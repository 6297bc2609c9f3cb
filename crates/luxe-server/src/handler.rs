use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::http::Uri;
use axum::response::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;

use luxe_types::{FurnitureItem, ItemId, ItemUpdate, NewItem};

use crate::error::{ServerError, ServerResult};
use crate::state::AppState;

/// Query string of a delete request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DeleteParams {
    pub id: Option<String>,
}

impl DeleteParams {
    /// Pick the first `id` pair; repeated keys are not an error.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let id = pairs
            .into_iter()
            .find(|(key, _)| key == "id")
            .map(|(_, value)| value);
        Self { id }
    }
}

/// Body of every delete response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub success: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".into(),
            version: env!("CARGO_PKG_VERSION").into(),
        }
    }
}

/// `GET /api/furniture`: the whole catalog, in insertion order.
pub async fn list_items(State(state): State<AppState>) -> ServerResult<Json<Vec<FurnitureItem>>> {
    let items = state.store.list_all()?;
    tracing::debug!(count = items.len(), "listed catalog");
    Ok(Json(items))
}

/// `POST /api/furniture`: add an item; the server assigns its id.
pub async fn create_item(
    State(state): State<AppState>,
    payload: Result<Json<NewItem>, JsonRejection>,
) -> ServerResult<Json<FurnitureItem>> {
    let Json(new) = payload?;
    let item = state.store.create(new)?;
    tracing::info!(id = %item.id, name = %item.name, "created catalog item");
    Ok(Json(item))
}

/// `PUT /api/furniture`: patch the item named by the body's `id`.
pub async fn update_item(
    State(state): State<AppState>,
    payload: Result<Json<ItemUpdate>, JsonRejection>,
) -> ServerResult<Json<FurnitureItem>> {
    let Json(update) = payload?;
    let id = update.id.clone();
    let item = state.store.update(&id, update)?;
    tracing::info!(%id, "updated catalog item");
    Ok(Json(item))
}

/// `DELETE /api/furniture?id=...`: always reports success.
///
/// A missing `id` parameter matches nothing and is treated like an
/// unknown id. If `id` is repeated, only the first value is deleted.
pub async fn delete_item(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> ServerResult<Json<DeleteResponse>> {
    let Query(pairs) = query?;
    let params = DeleteParams::from_pairs(pairs);
    match params.id {
        Some(id) => {
            let id = ItemId::new(id);
            let removed = state.store.delete(&id)?;
            tracing::info!(%id, removed, "deleted catalog item");
        }
        None => tracing::warn!("delete without id parameter ignored"),
    }
    Ok(Json(DeleteResponse { success: true }))
}

/// Health check handler.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::default())
}

/// Info handler.
pub async fn info_handler(State(state): State<AppState>) -> ServerResult<Json<serde_json::Value>> {
    let item_count = state.store.list_all()?.len();
    Ok(Json(json!({
        "name": "luxe-server",
        "version": env!("CARGO_PKG_VERSION"),
        "item_count": item_count,
    })))
}

/// Fallback for unknown paths.
pub async fn not_found(uri: Uri) -> ServerError {
    ServerError::NotFound(uri.path().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn first_id_wins() {
        let params = DeleteParams::from_pairs(pairs(&[("id", "1"), ("id", "2")]));
        assert_eq!(params.id.as_deref(), Some("1"));
    }

    #[test]
    fn other_keys_are_ignored() {
        let params = DeleteParams::from_pairs(pairs(&[("confirm", "yes"), ("id", "3")]));
        assert_eq!(params.id.as_deref(), Some("3"));
    }

    #[test]
    fn no_id_pair() {
        assert_eq!(DeleteParams::from_pairs(pairs(&[("x", "1")])), DeleteParams::default());
    }
}
