//! SQLite storage implementation for price history.

mod model;
mod repository;

pub use model::PriceRecordDB;
pub use repository::PriceHistoryRepository;
