use std::sync::Arc;
use crate::domains::asset::models::Asset;
use crate::shared::database::AssetRepository;
use crate::shared::errors::AssetError;

/// 자산 서비스
/// AssetService: read access to the asset registry
#[derive(Clone)]
pub struct AssetService {
    repository: Arc<dyn AssetRepository>,
}

impl AssetService {
    pub fn new(repository: Arc<dyn AssetRepository>) -> Self {
        Self { repository }
    }

    pub async fn get_all_assets(&self) -> Result<Vec<Asset>, AssetError> {
        self.repository
            .find_all()
            .await
            .map_err(|e| AssetError::DatabaseError(format!("Failed to fetch assets: {:#}", e)))
    }

    pub async fn get_asset(&self, id: u64) -> Result<Asset, AssetError> {
        let asset = self
            .repository
            .find_by_id(id)
            .await
            .map_err(|e| AssetError::DatabaseError(format!("Failed to fetch asset: {:#}", e)))?;

        asset.ok_or(AssetError::NotFound { id })
    }
}
