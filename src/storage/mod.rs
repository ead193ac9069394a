//! Persistence layer for the price store.
//!
//! This module provides:
//! - Store connection pool initialization ([`init_store_pool`])
//! - Schema migrations ([`run_migrations`])
//! - The batch writer ([`write_prices`]) that submits normalized prices in
//!   chunks of at most 25 records
//! - Read access for the price-listing endpoint ([`read_prices`])

mod batch;
mod migrations;
mod pool;
mod read;

// Re-export public API
pub use batch::{write_prices, WriteSummary};
pub use migrations::run_migrations;
pub use pool::init_store_pool;
pub use read::{read_prices, StoredPrice};
