//! Market data models
//!
//! - `price` - Batch spot price lookups (SpotPrices)
//! - `market` - Per-asset market metadata such as icons (MarketInfo)

mod market;
mod price;

pub use market::MarketInfo;
pub use price::SpotPrices;
