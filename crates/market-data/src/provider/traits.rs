//! Market data provider trait definitions.
//!
//! This module defines the core `MarketDataProvider` trait that all
//! market data providers must implement.

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::{MarketInfo, SpotPrices};

/// Trait for market data providers.
///
/// Implement this trait to add support for a new price source. Callers pass
/// the provider's own asset identifiers (e.g. "bitcoin") and a quote currency.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use price_tracker_market_data::{MarketDataError, MarketDataProvider, MarketInfo, SpotPrices};
///
/// struct FixedProvider;
///
/// #[async_trait]
/// impl MarketDataProvider for FixedProvider {
///     fn id(&self) -> &'static str {
///         "FIXED"
///     }
///
///     async fn get_spot_prices(
///         &self,
///         ids: &[String],
///         vs_currency: &str,
///     ) -> Result<SpotPrices, MarketDataError> {
///         let mut prices = SpotPrices::new();
///         for id in ids {
///             prices.insert(id, vs_currency, rust_decimal::Decimal::ONE);
///         }
///         Ok(prices)
///     }
///
///     async fn get_markets(
///         &self,
///         _ids: &[String],
///         _vs_currency: &str,
///     ) -> Result<Vec<MarketInfo>, MarketDataError> {
///         Ok(Vec::new())
///     }
/// }
/// ```
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Unique identifier for this provider.
    ///
    /// Should be a constant string like "COINGECKO". Used for logging and
    /// in error values.
    fn id(&self) -> &'static str;

    /// Fetch current spot prices for a batch of assets in one request.
    ///
    /// # Arguments
    ///
    /// * `ids` - Provider asset identifiers
    /// * `vs_currency` - Quote currency code (e.g. "usd")
    ///
    /// # Returns
    ///
    /// The prices the provider knows about. Identifiers the provider does
    /// not recognise are simply absent from the result.
    async fn get_spot_prices(
        &self,
        ids: &[String],
        vs_currency: &str,
    ) -> Result<SpotPrices, MarketDataError>;

    /// Fetch market metadata (icon URLs) for a batch of assets.
    ///
    /// # Arguments
    ///
    /// * `ids` - Provider asset identifiers
    /// * `vs_currency` - Quote currency code the listing is expressed in
    async fn get_markets(
        &self,
        ids: &[String],
        vs_currency: &str,
    ) -> Result<Vec<MarketInfo>, MarketDataError>;
}
