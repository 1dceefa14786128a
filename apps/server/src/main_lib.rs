use std::sync::Arc;

use anyhow::anyhow;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use price_tracker_core::{
    assets::{AssetService, AssetServiceTrait},
    prices::{PriceService, PriceServiceTrait, PriceValidator},
};
use price_tracker_market_data::{CoinGeckoProvider, MarketDataProvider};
use price_tracker_storage_sqlite::{
    assets::AssetRepository,
    db::{self, write_actor},
    prices::PriceHistoryRepository,
};

use crate::config::Config;

pub struct AppState {
    pub price_service: Arc<dyn PriceServiceTrait + Send + Sync>,
    pub asset_service: Arc<dyn AssetServiceTrait + Send + Sync>,
}

pub fn init_tracing() {
    let log_format = std::env::var("PT_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let validator = PriceValidator::from_offset_minutes(config.day_offset_minutes).ok_or_else(
        || {
            anyhow!(
                "PT_DAY_OFFSET_MINUTES out of range: {}",
                config.day_offset_minutes
            )
        },
    )?;

    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = write_actor::spawn_writer((*pool).clone());

    let asset_repository = Arc::new(AssetRepository::new(pool.clone(), writer.clone()));
    let price_repository = Arc::new(PriceHistoryRepository::new(pool.clone(), writer.clone()));

    let provider: Arc<dyn MarketDataProvider> = Arc::new(CoinGeckoProvider::new(
        config.coingecko_base_url.clone(),
        config.coingecko_api_key.clone(),
    ));
    tracing::info!(
        "Market data provider {} at {}",
        provider.id(),
        config.coingecko_base_url
    );

    let asset_service = Arc::new(AssetService::new(asset_repository.clone()));
    let price_service = Arc::new(PriceService::new(
        asset_repository,
        price_repository,
        provider,
        validator,
    ));

    Ok(Arc::new(AppState {
        price_service,
        asset_service,
    }))
}
