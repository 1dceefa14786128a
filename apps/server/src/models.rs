use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use price_tracker_core::{assets as core_assets, prices as core_prices};

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: String,
    pub external_id: String,
    pub name: String,
    pub symbol: String,
    pub icon_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<core_assets::Asset> for Asset {
    fn from(a: core_assets::Asset) -> Self {
        Self {
            id: a.id,
            external_id: a.external_id,
            name: a.name,
            symbol: a.symbol,
            icon_url: a.icon_url,
            created_at: a.created_at,
            updated_at: a.updated_at,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewAsset {
    /// Identifier used by the market data provider, e.g. "bitcoin"
    pub external_id: String,
    pub name: String,
    pub symbol: String,
    #[serde(default)]
    pub icon_url: Option<String>,
}

impl From<NewAsset> for core_assets::NewAsset {
    fn from(a: NewAsset) -> Self {
        Self {
            external_id: a.external_id,
            name: a.name,
            symbol: a.symbol,
            icon_url: a.icon_url,
        }
    }
}

/// Latest and previous recorded price of one asset. Prices are decimal strings.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct LatestPriceResponse {
    pub name: String,
    pub symbol: String,
    pub external_id: String,
    pub icon_url: Option<String>,
    #[schema(value_type = Option<String>, example = "50000.12")]
    pub latest_price: Option<Decimal>,
    pub last_updated: Option<DateTime<Utc>>,
    #[schema(value_type = Option<String>)]
    pub previous_price: Option<Decimal>,
}

impl From<core_prices::LatestPriceSummary> for LatestPriceResponse {
    fn from(s: core_prices::LatestPriceSummary) -> Self {
        Self {
            name: s.name,
            symbol: s.symbol,
            external_id: s.external_id,
            icon_url: s.icon_url,
            latest_price: s.latest_price,
            last_updated: s.last_updated,
            previous_price: s.previous_price,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Copy)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSummary {
    pub assets: usize,
    pub accepted: usize,
    pub rejected: usize,
    pub missing: usize,
    pub icons_updated: usize,
}

impl From<core_prices::UpdateSummary> for UpdateSummary {
    fn from(s: core_prices::UpdateSummary) -> Self {
        Self {
            assets: s.assets,
            accepted: s.accepted,
            rejected: s.rejected,
            missing: s.missing,
            icons_updated: s.icons_updated,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePricesResponse {
    pub message: String,
    pub summary: UpdateSummary,
}
