/// Quote currency used for every price lookup and stored record
pub const PRICE_CURRENCY: &str = "usd";
