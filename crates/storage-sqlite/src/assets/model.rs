//! Database model for assets.

use chrono::{DateTime, Utc};
use diesel::prelude::*;

use price_tracker_core::assets::{Asset, NewAsset};
use price_tracker_core::errors::Error;

use crate::utils::{format_timestamp, parse_timestamp};

/// Database model for assets
#[derive(Queryable, Identifiable, Insertable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::assets)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct AssetDB {
    pub id: String,
    pub external_id: String,
    pub name: String,
    pub symbol: String,
    pub icon_url: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl AssetDB {
    /// Builds a row for a new asset with a fresh id.
    pub fn from_new(new_asset: NewAsset, now: DateTime<Utc>) -> Self {
        let now = format_timestamp(now);
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            external_id: new_asset.external_id,
            name: new_asset.name,
            symbol: new_asset.symbol,
            icon_url: new_asset.icon_url,
            created_at: now.clone(),
            updated_at: now,
        }
    }
}

impl TryFrom<AssetDB> for Asset {
    type Error = Error;

    fn try_from(db: AssetDB) -> Result<Self, Self::Error> {
        Ok(Asset {
            created_at: parse_timestamp(&db.created_at)?,
            updated_at: parse_timestamp(&db.updated_at)?,
            id: db.id,
            external_id: db.external_id,
            name: db.name,
            symbol: db.symbol,
            icon_url: db.icon_url,
        })
    }
}
