use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::handler;
use crate::state::AppState;

/// The single catalog resource path.
pub const FURNITURE_PATH: &str = "/api/furniture";

/// Build the axum router with all catalog endpoints.
pub fn build_router(state: AppState, config: &ServerConfig) -> Router {
    let router = Router::new()
        .route(
            FURNITURE_PATH,
            get(handler::list_items)
                .post(handler::create_item)
                .put(handler::update_item)
                .delete(handler::delete_item),
        )
        .route("/v1/health", get(handler::health_handler))
        .route("/v1/info", get(handler::info_handler))
        .fallback(handler::not_found)
        .layer(DefaultBodyLimit::max(config.max_body_bytes))
        .layer(TraceLayer::new_for_http());

    let router = if config.allow_cors {
        router.layer(CorsLayer::permissive())
    } else {
        router
    };

    router.with_state(state)
}
