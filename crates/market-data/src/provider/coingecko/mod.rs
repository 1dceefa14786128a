//! CoinGecko market data provider implementation.
//!
//! This module provides crypto market data from the CoinGecko public API:
//! - Spot prices via the /simple/price endpoint
//! - Icon URLs via the /coins/markets endpoint
//!
//! The public tier does not need a key. A demo key, when configured, is sent
//! in the `x-cg-demo-api-key` header.
//! API documentation: https://docs.coingecko.com/reference/introduction

mod models;

use std::collections::HashMap;
use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use rust_decimal::Decimal;
use serde_json::Value;
use tracing::{debug, warn};

use crate::errors::MarketDataError;
use crate::models::{MarketInfo, SpotPrices};
use crate::provider::MarketDataProvider;

use models::{CoinMarketDto, ErrorResponse};

pub const DEFAULT_BASE_URL: &str = "https://api.coingecko.com/api/v3";
const PROVIDER_ID: &str = "COINGECKO";
const USER_AGENT: &str = concat!("price-tracker/", env!("CARGO_PKG_VERSION"));
const API_KEY_HEADER: &str = "x-cg-demo-api-key";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

// ============================================================================
// CoinGeckoProvider
// ============================================================================

/// CoinGecko market data provider.
///
/// All lookups for one call are batched into a single HTTP request.
pub struct CoinGeckoProvider {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl Default for CoinGeckoProvider {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, None)
    }
}

impl CoinGeckoProvider {
    /// Create a provider against `base_url` (no trailing slash needed).
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()
            .unwrap_or_else(|_| Client::new());

        let base_url = base_url.into().trim_end_matches('/').to_string();
        let api_key = api_key.filter(|key| !key.trim().is_empty());

        Self {
            client,
            base_url,
            api_key,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Make a GET request to the CoinGecko API and return the raw body.
    async fn fetch(&self, endpoint: &str, params: &[(&str, &str)]) -> Result<String, MarketDataError> {
        let url = format!("{}{}", self.base_url, endpoint);

        let mut request = self.client.get(&url).query(params);

        if let Some(key) = &self.api_key {
            request = request.header(API_KEY_HEADER, key);
        }

        debug!("CoinGecko request: {} with {} params", endpoint, params.len());

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                MarketDataError::Timeout {
                    provider: PROVIDER_ID.to_string(),
                }
            } else {
                MarketDataError::ProviderError {
                    provider: PROVIDER_ID.to_string(),
                    message: format!("Request failed: {}", e),
                }
            }
        })?;

        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(MarketDataError::RateLimited {
                provider: PROVIDER_ID.to_string(),
            });
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();

            if let Some(message) = serde_json::from_str::<ErrorResponse>(&body)
                .ok()
                .and_then(ErrorResponse::message)
            {
                return Err(MarketDataError::ProviderError {
                    provider: PROVIDER_ID.to_string(),
                    message: format!("HTTP {} - {}", status, message),
                });
            }

            return Err(MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("HTTP {} - {}", status, body),
            });
        }

        response.text().await.map_err(|e| {
            if e.is_timeout() {
                MarketDataError::Timeout {
                    provider: PROVIDER_ID.to_string(),
                }
            } else {
                MarketDataError::ProviderError {
                    provider: PROVIDER_ID.to_string(),
                    message: format!("Failed to read response: {}", e),
                }
            }
        })
    }
}

#[async_trait]
impl MarketDataProvider for CoinGeckoProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn get_spot_prices(
        &self,
        ids: &[String],
        vs_currency: &str,
    ) -> Result<SpotPrices, MarketDataError> {
        if ids.is_empty() {
            return Ok(SpotPrices::new());
        }

        let ids = ids.join(",");
        let body = self
            .fetch(
                "/simple/price",
                &[("ids", ids.as_str()), ("vs_currencies", vs_currency)],
            )
            .await?;

        parse_simple_price(&body)
    }

    async fn get_markets(
        &self,
        ids: &[String],
        vs_currency: &str,
    ) -> Result<Vec<MarketInfo>, MarketDataError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let ids = ids.join(",");
        let body = self
            .fetch(
                "/coins/markets",
                &[("vs_currency", vs_currency), ("ids", ids.as_str())],
            )
            .await?;

        parse_markets(&body)
    }
}

// ============================================================================
// Response parsing
// ============================================================================

/// Parse a `/simple/price` body: `{"bitcoin": {"usd": 50000.12}, ...}`.
///
/// Null or non-numeric prices are skipped, leaving the asset absent.
fn parse_simple_price(body: &str) -> Result<SpotPrices, MarketDataError> {
    let raw: HashMap<String, HashMap<String, Value>> =
        serde_json::from_str(body).map_err(|e| MarketDataError::ProviderError {
            provider: PROVIDER_ID.to_string(),
            message: format!("Failed to parse price response: {}", e),
        })?;

    let mut prices = SpotPrices::new();
    for (external_id, by_currency) in raw {
        for (currency, value) in by_currency {
            match value {
                Value::Number(number) => match number_to_decimal(&number) {
                    Some(price) => prices.insert(&external_id, &currency, price),
                    None => warn!(
                        "CoinGecko returned unrepresentable price {} for {}",
                        number, external_id
                    ),
                },
                Value::Null => {}
                other => warn!(
                    "CoinGecko returned non-numeric price {} for {}",
                    other, external_id
                ),
            }
        }
    }

    Ok(prices)
}

/// Parse a `/coins/markets` body into market metadata.
fn parse_markets(body: &str) -> Result<Vec<MarketInfo>, MarketDataError> {
    let rows: Vec<CoinMarketDto> =
        serde_json::from_str(body).map_err(|e| MarketDataError::ProviderError {
            provider: PROVIDER_ID.to_string(),
            message: format!("Failed to parse markets response: {}", e),
        })?;

    Ok(rows
        .into_iter()
        .map(|row| MarketInfo {
            external_id: row.id,
            icon_url: row.image,
        })
        .collect())
}

/// Convert a JSON number through its textual form so the digits the
/// provider sent are kept as-is.
fn number_to_decimal(number: &serde_json::Number) -> Option<Decimal> {
    let text = number.to_string();
    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .ok()
}
