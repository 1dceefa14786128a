//! Text encodings for values stored in SQLite.
//!
//! Timestamps are RFC 3339 in UTC with a fixed number of fractional digits,
//! so ordering the text orders the instants. Decimals keep their exact
//! base-10 representation.

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use rust_decimal::Decimal;
use std::str::FromStr;

use price_tracker_core::errors::Result;

pub const DAY_FORMAT: &str = "%Y-%m-%d";

pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

pub fn parse_timestamp(text: &str) -> Result<DateTime<Utc>> {
    Ok(DateTime::parse_from_rfc3339(text)?.with_timezone(&Utc))
}

pub fn format_day(day: NaiveDate) -> String {
    day.format(DAY_FORMAT).to_string()
}

pub fn parse_decimal(text: &str) -> Result<Decimal> {
    Ok(Decimal::from_str(text)?)
}
