//! Price Tracker Market Data Crate
//!
//! This crate provides provider-agnostic spot price fetching for the
//! price tracker.
//!
//! # Overview
//!
//! - [`MarketDataProvider`] - The trait every price source implements
//! - [`CoinGeckoProvider`] - CoinGecko implementation (spot prices and icons)
//! - [`SpotPrices`] - Result of a batch price lookup
//! - [`MarketInfo`] - Per-asset market metadata
//! - [`MarketDataError`] - Errors returned by providers

pub mod errors;
pub mod models;
pub mod provider;

pub use errors::MarketDataError;
pub use models::{MarketInfo, SpotPrices};
pub use provider::coingecko::{CoinGeckoProvider, DEFAULT_BASE_URL as COINGECKO_BASE_URL};
pub use provider::MarketDataProvider;
