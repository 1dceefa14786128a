//! Price history storage traits.
//!
//! This module defines the storage interface for price history. The trait
//! abstracts the persistence layer so the update cycle can be tested without
//! a database.

use async_trait::async_trait;
use std::collections::HashMap;

use super::model::{LatestPricePair, NewPriceRecord, PriceRecord};
use crate::errors::Result;

/// Storage interface for price history.
///
/// # Design Notes
///
/// - Async methods are used for writes, which go through the single writer
/// - Sync methods are used for reads served from the connection pool
/// - Records are never updated or deleted
#[async_trait]
pub trait PriceHistoryStore: Send + Sync {
    /// Returns every record of one asset, in no particular order.
    ///
    /// The caller gets a snapshot; later writes do not affect it.
    fn history_for_asset(&self, asset_id: &str) -> Result<Vec<PriceRecord>>;

    /// Appends a record.
    ///
    /// # Errors
    ///
    /// `DatabaseError::UniqueViolation` when the asset already has a record
    /// for `record.day`.
    async fn append(&self, record: NewPriceRecord) -> Result<PriceRecord>;

    /// Returns the two most recent records of every asset with history,
    /// keyed by asset id.
    fn latest_pairs(&self) -> Result<HashMap<String, LatestPricePair>>;
}
