use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Spot prices returned by a single batch lookup.
///
/// Keyed by the provider's asset identifier, then by lower-case currency code.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SpotPrices(HashMap<String, HashMap<String, Decimal>>);

impl SpotPrices {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the price of `external_id` in `currency`.
    pub fn insert(&mut self, external_id: &str, currency: &str, price: Decimal) {
        self.0
            .entry(external_id.to_string())
            .or_default()
            .insert(currency.to_ascii_lowercase(), price);
    }

    /// Looks up the price of `external_id` in `currency`.
    pub fn price_for(&self, external_id: &str, currency: &str) -> Option<Decimal> {
        self.0
            .get(external_id)
            .and_then(|by_currency| by_currency.get(&currency.to_ascii_lowercase()))
            .copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<HashMap<String, HashMap<String, Decimal>>> for SpotPrices {
    fn from(map: HashMap<String, HashMap<String, Decimal>>) -> Self {
        Self(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_price_for_is_case_insensitive_on_currency() {
        let mut prices = SpotPrices::new();
        prices.insert("bitcoin", "USD", dec!(50000.12));

        assert_eq!(prices.price_for("bitcoin", "usd"), Some(dec!(50000.12)));
        assert_eq!(prices.price_for("bitcoin", "USD"), Some(dec!(50000.12)));
    }

    #[test]
    fn test_price_for_missing_entries() {
        let mut prices = SpotPrices::new();
        prices.insert("bitcoin", "usd", dec!(1));

        assert_eq!(prices.price_for("ethereum", "usd"), None);
        assert_eq!(prices.price_for("bitcoin", "eur"), None);
        assert_eq!(prices.len(), 1);
    }
}
