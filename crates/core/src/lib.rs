//! Price Tracker Core - Domain entities, services, and traits.
//!
//! This crate contains the business logic of the price tracker: the price
//! acceptance rule, the update cycle and the latest-price projection.
//! It is database-agnostic and defines traits that are implemented
//! by the `storage-sqlite` crate.

pub mod assets;
pub mod constants;
pub mod errors;
pub mod prices;

pub use assets::*;
pub use prices::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
