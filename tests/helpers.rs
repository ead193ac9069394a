// Shared test helpers for store setup and test data creation.

use sqlx::SqlitePool;

use fuel_sync::storage::run_migrations;
use fuel_sync::{Config, LogFormat, LogLevel};

/// Creates a test store pool with migrations applied.
/// Uses an in-memory database for fast test execution.
#[allow(dead_code)] // Used by other test files
pub async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePool::connect("sqlite::memory:")
        .await
        .expect("Failed to create test store pool");
    run_migrations(&pool)
        .await
        .expect("Failed to run migrations");
    pool
}

/// Creates a Config pointed at a mock upstream server.
#[allow(dead_code)]
pub fn create_test_config(base_url: String) -> Config {
    Config {
        api_key: "test-key".to_string(),
        base_url,
        timeout_seconds: 5,
        log_level: LogLevel::Error, // Reduce noise in tests
        log_format: LogFormat::Plain,
        ..Default::default()
    }
}

/// Counts rows in the price table.
#[allow(dead_code)]
pub async fn count_prices(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM current_fuel_prices")
        .fetch_one(pool)
        .await
        .expect("Failed to count price rows")
}
