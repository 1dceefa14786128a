//! SQLite storage implementation for the price tracker.
//!
//! This crate provides all database-related functionality using Diesel ORM with SQLite.
//! It implements the repository traits defined in `price-tracker-core` and contains:
//! - Database connection pooling and management
//! - Embedded Diesel migrations
//! - The single writer actor that serialises every write
//! - Repository implementations for assets and price history
//!
//! This crate is the only place in the workspace where Diesel dependencies exist.

pub mod db;
pub mod errors;
pub mod schema;
pub mod utils;

// Repository implementations
pub mod assets;
pub mod prices;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, init, run_migrations, spawn_writer, DbConnection, DbPool,
    WriteHandle,
};

pub use assets::AssetRepository;
pub use prices::PriceHistoryRepository;

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

// Re-export from price-tracker-core for convenience
pub use price_tracker_core::errors::{DatabaseError, Error, Result};
