//! Prices module - price history models, the acceptance rule, and the
//! update/query service.

mod model;
mod service;
mod store;
mod validator;


pub use model::{
    LatestPricePair, LatestPriceSummary, NewPriceRecord, PriceRecord, UpdateSummary,
};
pub use service::{PriceService, PriceServiceTrait};
pub use store::PriceHistoryStore;
pub use validator::PriceValidator;
