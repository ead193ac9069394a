//! fuel_sync library: SA fuel-price update pipeline
//!
//! This library fetches current fuel prices from the SAFPIS pricing API and
//! persists them into a SQLite-backed price store. The pipeline is a strict
//! sequence: fetch the site prices, normalize each price into an exact
//! decimal, then write the records in batches of 25 with per-batch failure
//! tracking.
//!
//! # Example
//!
//! ```no_run
//! use fuel_sync::{run_update, Config};
//! use fuel_sync::initialization::init_client;
//! use fuel_sync::storage::{init_store_pool, run_migrations};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     api_key: std::env::var("FUEL_API_KEY")?,
//!     ..Default::default()
//! };
//! let pool = init_store_pool(&config.resolved_store_path()).await?;
//! run_migrations(&pool).await?;
//! let client = init_client(&config).await?;
//!
//! let response = run_update(&client, &pool, &config).await;
//! println!("{} {}", response.status_code, response.body);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or ensure you're calling library functions within an async
//! context.

#![warn(missing_docs)]

pub mod config;
mod convert;
mod error_handling;
mod fetch;
pub mod initialization;
mod models;
pub mod server;
pub mod storage;
mod update;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use convert::normalize_prices;
pub use error_handling::UpdateError;
pub use fetch::{fetch_site_prices, Fetched};
pub use models::{NormalizedPrice, PriceFeed, SitePrice};
pub use storage::{write_prices, WriteSummary};
pub use update::{run_update, Phase, UpdateResponse};
