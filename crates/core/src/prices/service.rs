//! Price Service.
//!
//! Runs the update cycle (fetch, validate, append) and serves the
//! latest-price projection.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

use price_tracker_market_data::MarketDataProvider;

use super::model::{LatestPriceSummary, NewPriceRecord, UpdateSummary};
use super::store::PriceHistoryStore;
use super::validator::PriceValidator;
use crate::assets::{Asset, AssetRepositoryTrait};
use crate::constants::PRICE_CURRENCY;
use crate::errors::Result;

/// Price operations exposed to the HTTP layer and the scheduler.
#[async_trait]
pub trait PriceServiceTrait: Send + Sync {
    /// Runs one update cycle observed at the current time.
    async fn update_prices(&self) -> Result<UpdateSummary>;

    /// Runs one update cycle with an explicit observation time.
    async fn update_prices_at(&self, observed_at: DateTime<Utc>) -> Result<UpdateSummary>;

    /// Latest and previous price of every asset, ordered by name.
    fn get_latest_prices(&self) -> Result<Vec<LatestPriceSummary>>;
}

pub struct PriceService {
    asset_repository: Arc<dyn AssetRepositoryTrait>,
    price_store: Arc<dyn PriceHistoryStore>,
    provider: Arc<dyn MarketDataProvider>,
    validator: PriceValidator,
    /// Held for a whole update cycle so read-validate-append never interleaves.
    update_lock: Mutex<()>,
}

impl PriceService {
    pub fn new(
        asset_repository: Arc<dyn AssetRepositoryTrait>,
        price_store: Arc<dyn PriceHistoryStore>,
        provider: Arc<dyn MarketDataProvider>,
        validator: PriceValidator,
    ) -> Self {
        Self {
            asset_repository,
            price_store,
            provider,
            validator,
            update_lock: Mutex::new(()),
        }
    }

    /// Refreshes stored icon URLs from the provider's market listing.
    ///
    /// Failures are logged and swallowed. Returns how many assets changed.
    async fn refresh_icons(&self, assets: &[Asset], ids: &[String]) -> usize {
        let markets = match self.provider.get_markets(ids, PRICE_CURRENCY).await {
            Ok(markets) => markets,
            Err(e) => {
                warn!("Failed to fetch market metadata from {}: {}", self.provider.id(), e);
                return 0;
            }
        };

        let by_external_id: HashMap<&str, &Asset> = assets
            .iter()
            .map(|asset| (asset.external_id.as_str(), asset))
            .collect();

        let mut updated = 0;
        for market in &markets {
            let Some(icon_url) = market.usable_icon_url() else {
                continue;
            };
            let Some(asset) = by_external_id.get(market.external_id.as_str()) else {
                continue;
            };
            if asset.icon_url.as_deref() == Some(icon_url) {
                continue;
            }

            match self
                .asset_repository
                .update_icon_url(&asset.id, icon_url)
                .await
            {
                Ok(_) => {
                    debug!("Updated icon for {}", asset.external_id);
                    updated += 1;
                }
                Err(e) => warn!("Failed to update icon for {}: {}", asset.external_id, e),
            }
        }

        updated
    }
}

#[async_trait]
impl PriceServiceTrait for PriceService {
    async fn update_prices(&self) -> Result<UpdateSummary> {
        self.update_prices_at(Utc::now()).await
    }

    async fn update_prices_at(&self, observed_at: DateTime<Utc>) -> Result<UpdateSummary> {
        let _guard = self.update_lock.lock().await;

        let assets = self.asset_repository.list()?;
        if assets.is_empty() {
            info!("No assets to update");
            return Ok(UpdateSummary::default());
        }

        let ids: Vec<String> = assets.iter().map(|a| a.external_id.clone()).collect();

        let mut summary = UpdateSummary {
            assets: assets.len(),
            icons_updated: self.refresh_icons(&assets, &ids).await,
            ..UpdateSummary::default()
        };

        let prices = self.provider.get_spot_prices(&ids, PRICE_CURRENCY).await?;
        let day = self.validator.day_of(observed_at);

        for asset in &assets {
            let Some(price) = prices.price_for(&asset.external_id, PRICE_CURRENCY) else {
                warn!("No price found for {}", asset.external_id);
                summary.missing += 1;
                continue;
            };

            let history = self.price_store.history_for_asset(&asset.id)?;
            if !self.validator.should_save_price(price, observed_at, &history) {
                warn!(
                    "Rejected price {} for {} on {}: not positive or already recorded",
                    price, asset.external_id, day
                );
                summary.rejected += 1;
                continue;
            }

            let record = NewPriceRecord {
                asset_id: asset.id.clone(),
                price,
                timestamp: observed_at,
                day,
            };

            match self.price_store.append(record).await {
                Ok(_) => summary.accepted += 1,
                Err(e) if e.is_unique_violation() => {
                    warn!(
                        "Rejected price {} for {} on {}: recorded concurrently",
                        price, asset.external_id, day
                    );
                    summary.rejected += 1;
                }
                Err(e) => return Err(e),
            }
        }

        info!(
            "Price update finished: {} assets, {} accepted, {} rejected, {} missing, {} icons updated",
            summary.assets,
            summary.accepted,
            summary.rejected,
            summary.missing,
            summary.icons_updated
        );

        Ok(summary)
    }

    fn get_latest_prices(&self) -> Result<Vec<LatestPriceSummary>> {
        let mut assets = self.asset_repository.list()?;
        assets.sort_by(|a, b| {
            a.name
                .cmp(&b.name)
                .then_with(|| a.external_id.cmp(&b.external_id))
        });

        let pairs = self.price_store.latest_pairs()?;

        Ok(assets
            .iter()
            .map(|asset| LatestPriceSummary::new(asset, pairs.get(&asset.id)))
            .collect())
    }
}
