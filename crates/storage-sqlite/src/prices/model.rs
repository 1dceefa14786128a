//! Database model for price history records.

use chrono::{DateTime, Utc};
use diesel::prelude::*;

use price_tracker_core::errors::Error;
use price_tracker_core::prices::{NewPriceRecord, PriceRecord};

use crate::utils::{format_day, format_timestamp, parse_decimal, parse_timestamp};

/// Database model for price history
#[derive(Queryable, Identifiable, Selectable, Insertable, QueryableByName, Debug, Clone, PartialEq)]
#[diesel(table_name = crate::schema::price_history)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct PriceRecordDB {
    #[diesel(sql_type = diesel::sql_types::Text)]
    pub id: String,
    #[diesel(sql_type = diesel::sql_types::Text)]
    pub asset_id: String,
    #[diesel(sql_type = diesel::sql_types::Text)]
    pub price: String,
    #[diesel(sql_type = diesel::sql_types::Text)]
    pub timestamp: String,
    #[diesel(sql_type = diesel::sql_types::Text)]
    pub day: String,
    #[diesel(sql_type = diesel::sql_types::Text)]
    pub created_at: String,
}

impl PriceRecordDB {
    /// Builds a row for a new record with a fresh id.
    pub fn from_new(record: NewPriceRecord, now: DateTime<Utc>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            asset_id: record.asset_id,
            price: record.price.to_string(),
            timestamp: format_timestamp(record.timestamp),
            day: format_day(record.day),
            created_at: format_timestamp(now),
        }
    }
}

impl TryFrom<PriceRecordDB> for PriceRecord {
    type Error = Error;

    fn try_from(db: PriceRecordDB) -> Result<Self, Self::Error> {
        Ok(PriceRecord {
            price: parse_decimal(&db.price)?,
            timestamp: parse_timestamp(&db.timestamp)?,
            created_at: parse_timestamp(&db.created_at)?,
            id: db.id,
            asset_id: db.asset_id,
        })
    }
}
