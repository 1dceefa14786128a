//! Market data provider abstractions and implementations.
//!
//! This module contains:
//! - The `MarketDataProvider` trait that all providers implement
//! - The CoinGecko implementation used for crypto spot prices

mod traits;

pub mod coingecko;

pub use traits::MarketDataProvider;
