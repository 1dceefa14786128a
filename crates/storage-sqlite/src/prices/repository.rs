use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::sql_query;
use diesel::sqlite::SqliteConnection;
use std::collections::HashMap;
use std::sync::Arc;

use price_tracker_core::prices::{LatestPricePair, NewPriceRecord, PriceHistoryStore, PriceRecord};
use price_tracker_core::Result;

use super::model::PriceRecordDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::price_history;

/// Repository for the append-only price history table.
///
/// Reads use the pool; appends go through the writer actor. The
/// `(asset_id, day)` unique index rejects a second record for the same day.
pub struct PriceHistoryRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl PriceHistoryRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl PriceHistoryStore for PriceHistoryRepository {
    fn history_for_asset(&self, asset_id: &str) -> Result<Vec<PriceRecord>> {
        let mut conn = get_connection(&self.pool)?;

        let rows = price_history::table
            .filter(price_history::asset_id.eq(asset_id))
            .select(PriceRecordDB::as_select())
            .load::<PriceRecordDB>(&mut conn)
            .into_core()?;

        rows.into_iter().map(PriceRecord::try_from).collect()
    }

    async fn append(&self, record: NewPriceRecord) -> Result<PriceRecord> {
        let row = PriceRecordDB::from_new(record, Utc::now());

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<PriceRecord> {
                diesel::insert_into(price_history::table)
                    .values(&row)
                    .execute(conn)
                    .into_core()?;
                PriceRecord::try_from(row)
            })
            .await
    }

    fn latest_pairs(&self) -> Result<HashMap<String, LatestPricePair>> {
        let mut conn = get_connection(&self.pool)?;

        let rows: Vec<PriceRecordDB> = sql_query(
            "WITH RankedPrices AS ( \
                SELECT \
                    p.id, p.asset_id, p.price, p.timestamp, p.day, p.created_at, \
                    ROW_NUMBER() OVER (PARTITION BY p.asset_id ORDER BY p.timestamp DESC) AS rn \
                FROM price_history p \
            ) \
            SELECT id, asset_id, price, timestamp, day, created_at \
            FROM RankedPrices \
            WHERE rn <= 2 \
            ORDER BY asset_id, rn",
        )
        .load(&mut conn)
        .into_core()?;

        let mut grouped: HashMap<String, Vec<PriceRecord>> = HashMap::new();
        for row in rows {
            let record = PriceRecord::try_from(row)?;
            grouped
                .entry(record.asset_id.clone())
                .or_default()
                .push(record);
        }

        Ok(grouped
            .into_iter()
            .map(|(asset_id, records)| (asset_id, LatestPricePair::from_records(records)))
            .collect())
    }
}
