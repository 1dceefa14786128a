//! Price acceptance rule.
//!
//! Decides whether a freshly observed price becomes a new history record.
//! A price is accepted when it is strictly positive and the asset has no
//! record yet for the same calendar day. Time of day and the values of
//! existing records play no part.

use chrono::{DateTime, FixedOffset, NaiveDate, Offset, Utc};
use rust_decimal::Decimal;

use super::model::PriceRecord;

/// Pure decision function over a price history snapshot.
///
/// The calendar day of a timestamp is taken in a fixed offset, UTC unless
/// built with [`PriceValidator::with_offset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceValidator {
    offset: FixedOffset,
}

impl Default for PriceValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl PriceValidator {
    /// Validator that buckets days in UTC.
    pub fn new() -> Self {
        Self { offset: Utc.fix() }
    }

    /// Validator that buckets days in `offset`.
    pub fn with_offset(offset: FixedOffset) -> Self {
        Self { offset }
    }

    /// Validator for an offset given in minutes east of UTC. `None` when the
    /// offset is out of range (more than a day).
    pub fn from_offset_minutes(minutes: i32) -> Option<Self> {
        minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .map(Self::with_offset)
    }

    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    /// Calendar day of `timestamp` in this validator's offset.
    pub fn day_of(&self, timestamp: DateTime<Utc>) -> NaiveDate {
        timestamp.with_timezone(&self.offset).date_naive()
    }

    /// Returns true when `candidate_price` should be appended to `history`.
    ///
    /// `history` may be in any order and is only read.
    pub fn should_save_price(
        &self,
        candidate_price: Decimal,
        observed_at: DateTime<Utc>,
        history: &[PriceRecord],
    ) -> bool {
        if candidate_price <= Decimal::ZERO {
            return false;
        }

        let day = self.day_of(observed_at);
        !history
            .iter()
            .any(|record| self.day_of(record.timestamp) == day)
    }
}
