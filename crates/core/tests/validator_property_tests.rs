//! Property-based tests for the price acceptance rule.
//!
//! Uses `proptest` to check the rule over random prices, timestamps and
//! histories.

use chrono::{DateTime, Duration, TimeZone, Utc};
use price_tracker_core::prices::{PriceRecord, PriceValidator};
use proptest::prelude::*;
use rust_decimal::Decimal;

// =============================================================================
// Generators
// =============================================================================

/// Seconds between 2020-01-01 and roughly 2030.
fn arb_timestamp() -> impl Strategy<Value = DateTime<Utc>> {
    (1_577_836_800i64..1_893_456_000i64).prop_map(|secs| Utc.timestamp_opt(secs, 0).unwrap())
}

/// Prices with up to 8 decimal places, positive or not.
fn arb_price() -> impl Strategy<Value = Decimal> {
    (-1_000_000_000i64..10_000_000_000_000i64).prop_map(|units| Decimal::new(units, 8))
}

fn arb_positive_price() -> impl Strategy<Value = Decimal> {
    (1i64..10_000_000_000_000i64).prop_map(|units| Decimal::new(units, 8))
}

fn record(timestamp: DateTime<Utc>, price: Decimal) -> PriceRecord {
    PriceRecord {
        id: format!("rec-{}", timestamp.timestamp()),
        asset_id: "asset-1".to_string(),
        price,
        timestamp,
        created_at: timestamp,
    }
}

fn arb_history(max_len: usize) -> impl Strategy<Value = Vec<PriceRecord>> {
    proptest::collection::vec((arb_timestamp(), arb_positive_price()), 0..=max_len)
        .prop_map(|rows| rows.into_iter().map(|(ts, p)| record(ts, p)).collect())
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn non_positive_price_is_never_saved(
        units in -1_000_000_000i64..=0,
        observed_at in arb_timestamp(),
        history in arb_history(10),
    ) {
        let validator = PriceValidator::new();
        prop_assert!(!validator.should_save_price(Decimal::new(units, 8), observed_at, &history));
    }

    #[test]
    fn same_day_record_blocks_any_price(
        price in arb_price(),
        observed_at in arb_timestamp(),
        seconds_into_day in 0u32..86_400,
        history in arb_history(10),
    ) {
        let validator = PriceValidator::new();
        let day_start = observed_at.date_naive().and_hms_opt(0, 0, 0).unwrap().and_utc();
        let mut history = history;
        history.push(record(day_start + Duration::seconds(seconds_into_day.into()), Decimal::ONE));

        prop_assert!(!validator.should_save_price(price, observed_at, &history));
    }

    #[test]
    fn positive_price_on_a_new_day_is_saved(
        price in arb_positive_price(),
        observed_at in arb_timestamp(),
        history in arb_history(10),
    ) {
        let validator = PriceValidator::new();
        let day = observed_at.date_naive();
        let history: Vec<PriceRecord> = history
            .into_iter()
            .filter(|r| r.timestamp.date_naive() != day)
            .collect();

        prop_assert!(validator.should_save_price(price, observed_at, &history));
    }

    #[test]
    fn decision_is_repeatable_and_leaves_history_untouched(
        price in arb_price(),
        observed_at in arb_timestamp(),
        history in arb_history(10),
    ) {
        let validator = PriceValidator::new();
        let snapshot = history.clone();

        let first = validator.should_save_price(price, observed_at, &history);
        let second = validator.should_save_price(price, observed_at, &history);

        prop_assert_eq!(first, second);
        prop_assert_eq!(history, snapshot);
    }

    #[test]
    fn history_order_does_not_matter(
        price in arb_price(),
        observed_at in arb_timestamp(),
        history in arb_history(10),
    ) {
        let validator = PriceValidator::new();
        let mut reversed = history.clone();
        reversed.reverse();

        prop_assert_eq!(
            validator.should_save_price(price, observed_at, &history),
            validator.should_save_price(price, observed_at, &reversed)
        );
    }

    #[test]
    fn time_of_day_is_irrelevant(
        price in arb_price(),
        observed_at in arb_timestamp(),
        other_second in 0u32..86_400,
        history in arb_history(10),
    ) {
        let validator = PriceValidator::new();
        let day_start = observed_at.date_naive().and_hms_opt(0, 0, 0).unwrap().and_utc();
        let same_day = day_start + Duration::seconds(other_second.into());

        prop_assert_eq!(
            validator.should_save_price(price, observed_at, &history),
            validator.should_save_price(price, same_day, &history)
        );
    }
}
