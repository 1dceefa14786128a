use log::debug;
use std::sync::Arc;

use super::assets_model::{Asset, NewAsset};
use super::assets_traits::{AssetRepositoryTrait, AssetServiceTrait};
use crate::errors::Result;

/// Service for managing assets
pub struct AssetService {
    asset_repository: Arc<dyn AssetRepositoryTrait>,
}

impl AssetService {
    /// Creates a new AssetService instance
    pub fn new(asset_repository: Arc<dyn AssetRepositoryTrait>) -> Self {
        Self { asset_repository }
    }
}

// Implement the service trait
#[async_trait::async_trait]
impl AssetServiceTrait for AssetService {
    fn get_assets(&self) -> Result<Vec<Asset>> {
        self.asset_repository.list()
    }

    fn get_asset_by_id(&self, asset_id: &str) -> Result<Asset> {
        self.asset_repository.get_by_id(asset_id)
    }

    async fn create_asset(&self, new_asset: NewAsset) -> Result<Asset> {
        let new_asset = new_asset.normalized()?;
        debug!("Creating asset {}", new_asset.external_id);
        self.asset_repository.create(new_asset).await
    }
}
