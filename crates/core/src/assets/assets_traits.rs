use super::assets_model::{Asset, NewAsset};
use crate::errors::Result;

/// Trait defining the contract for Asset service operations.
#[async_trait::async_trait]
pub trait AssetServiceTrait: Send + Sync {
    fn get_assets(&self) -> Result<Vec<Asset>>;
    fn get_asset_by_id(&self, asset_id: &str) -> Result<Asset>;
    /// Validates, normalises and stores a new asset.
    async fn create_asset(&self, new_asset: NewAsset) -> Result<Asset>;
}

/// Trait defining the contract for Asset repository operations.
#[async_trait::async_trait]
pub trait AssetRepositoryTrait: Send + Sync {
    /// Inserts an asset. A duplicate `external_id` is a unique violation.
    async fn create(&self, new_asset: NewAsset) -> Result<Asset>;
    fn get_by_id(&self, asset_id: &str) -> Result<Asset>;
    /// Lists every asset ordered by name.
    fn list(&self) -> Result<Vec<Asset>>;
    async fn update_icon_url(&self, asset_id: &str, icon_url: &str) -> Result<Asset>;
}
