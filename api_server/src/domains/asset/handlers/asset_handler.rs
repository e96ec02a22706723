use crate::domains::asset::models::Asset;
use crate::shared::errors::AssetError;
use crate::shared::services::AppState;
use axum::{extract::{Path, State}, http::StatusCode, Json};

/// 자산 목록 조회 핸들러
/// List assets handler
#[utoipa::path(
    get,
    path = "/api/assets",
    responses(
        (status = 200, description = "Assets retrieved successfully", body = Vec<Asset>),
        (status = 500, description = "Internal server error")
    ),
    tag = "Assets"
)]
pub async fn get_all_assets(
    State(app_state): State<AppState>,
) -> Result<Json<Vec<Asset>>, (StatusCode, Json<serde_json::Value>)> {
    let assets = app_state
        .asset_state
        .asset_service
        .get_all_assets()
        .await
        .map_err(|e: AssetError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(Json(assets))
}

/// 자산 조회 핸들러 (ID로)
/// Get asset by ID handler
#[utoipa::path(
    get,
    path = "/api/assets/{id}",
    params(
        ("id" = u64, Path, description = "Asset ID")
    ),
    responses(
        (status = 200, description = "Asset retrieved successfully", body = Asset),
        (status = 404, description = "Asset not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Assets"
)]
pub async fn get_asset(
    State(app_state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Asset>, (StatusCode, Json<serde_json::Value>)> {
    let asset = app_state
        .asset_state
        .asset_service
        .get_asset(id)
        .await
        .map_err(|e: AssetError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(Json(asset))
}
