// Asset domain routes
use axum::{routing::get, Router};
use crate::domains::asset::handlers::asset_handler;
use crate::shared::services::AppState;

pub fn create_asset_router() -> Router<AppState> {
    Router::new()
        .route("/", get(asset_handler::get_all_assets))
        .route("/:id", get(asset_handler::get_asset))
}
