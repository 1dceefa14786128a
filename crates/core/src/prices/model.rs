//! Price history domain models.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::assets::Asset;

/// One recorded observation of an asset's price. Append-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceRecord {
    pub id: String,
    pub asset_id: String,
    pub price: Decimal,
    pub timestamp: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// Input model for appending a price record.
///
/// `day` is the bucket the acceptance rule compared on; storage keeps it so
/// the one-per-day rule is also enforced by a unique index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPriceRecord {
    pub asset_id: String,
    pub price: Decimal,
    pub timestamp: DateTime<Utc>,
    pub day: NaiveDate,
}

/// The two most recent records of one asset.
///
/// # Fields
///
/// * `latest` - The most recent record, if any
/// * `previous` - The record before it, if any
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LatestPricePair {
    pub latest: Option<PriceRecord>,
    pub previous: Option<PriceRecord>,
}

impl LatestPricePair {
    /// Builds the pair from records of a single asset in any order.
    pub fn from_records(mut records: Vec<PriceRecord>) -> Self {
        records.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        let mut iter = records.into_iter();
        Self {
            latest: iter.next(),
            previous: iter.next(),
        }
    }
}

/// Latest-price projection returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LatestPriceSummary {
    pub name: String,
    pub symbol: String,
    pub external_id: String,
    pub icon_url: Option<String>,
    pub latest_price: Option<Decimal>,
    pub last_updated: Option<DateTime<Utc>>,
    pub previous_price: Option<Decimal>,
}

impl LatestPriceSummary {
    pub fn new(asset: &Asset, pair: Option<&LatestPricePair>) -> Self {
        let latest = pair.and_then(|p| p.latest.as_ref());
        let previous = pair.and_then(|p| p.previous.as_ref());

        Self {
            name: asset.name.clone(),
            symbol: asset.symbol.clone(),
            external_id: asset.external_id.clone(),
            icon_url: asset.icon_url.clone(),
            latest_price: latest.map(|r| r.price),
            last_updated: latest.map(|r| r.timestamp),
            previous_price: previous.map(|r| r.price),
        }
    }
}

/// Outcome counters of one update cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSummary {
    /// Assets considered in this cycle
    pub assets: usize,
    /// New records appended
    pub accepted: usize,
    /// Prices refused by the acceptance rule or the unique index
    pub rejected: usize,
    /// Assets the provider returned no price for
    pub missing: usize,
    /// Icon URLs refreshed from market metadata
    pub icons_updated: usize,
}
