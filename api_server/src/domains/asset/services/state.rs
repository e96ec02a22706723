// Asset domain state
use crate::domains::asset::services::AssetService;

#[derive(Clone)]
pub struct AssetState {
    pub asset_service: AssetService,
}

impl AssetState {
    pub fn new(asset_service: AssetService) -> Self {
        Self { asset_service }
    }
}
