use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use std::sync::Arc;

use price_tracker_core::assets::{Asset, AssetRepositoryTrait, NewAsset};
use price_tracker_core::Result;

use super::model::AssetDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::assets;
use crate::utils::format_timestamp;

/// Repository for managing asset data in the database
pub struct AssetRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl AssetRepository {
    /// Creates a new AssetRepository instance
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl AssetRepositoryTrait for AssetRepository {
    async fn create(&self, new_asset: NewAsset) -> Result<Asset> {
        let new_asset = new_asset.normalized()?;
        let asset_db = AssetDB::from_new(new_asset, Utc::now());

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Asset> {
                let result_db = diesel::insert_into(assets::table)
                    .values(&asset_db)
                    .returning(AssetDB::as_returning())
                    .get_result::<AssetDB>(conn)
                    .into_core()?;
                Asset::try_from(result_db)
            })
            .await
    }

    fn get_by_id(&self, asset_id: &str) -> Result<Asset> {
        let mut conn = get_connection(&self.pool)?;

        let result = assets::table
            .select(AssetDB::as_select())
            .find(asset_id)
            .first::<AssetDB>(&mut conn)
            .into_core()?;

        Asset::try_from(result)
    }

    fn list(&self) -> Result<Vec<Asset>> {
        let mut conn = get_connection(&self.pool)?;

        let results = assets::table
            .select(AssetDB::as_select())
            .order((assets::name.asc(), assets::external_id.asc()))
            .load::<AssetDB>(&mut conn)
            .into_core()?;

        results.into_iter().map(Asset::try_from).collect()
    }

    async fn update_icon_url(&self, asset_id: &str, icon_url: &str) -> Result<Asset> {
        let asset_id = asset_id.to_string();
        let icon_url = icon_url.to_string();
        let now = format_timestamp(Utc::now());

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Asset> {
                let result_db = diesel::update(assets::table.find(&asset_id))
                    .set((
                        assets::icon_url.eq(Some(icon_url)),
                        assets::updated_at.eq(now),
                    ))
                    .returning(AssetDB::as_returning())
                    .get_result::<AssetDB>(conn)
                    .into_core()?;
                Asset::try_from(result_db)
            })
            .await
    }
}
