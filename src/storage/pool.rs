//! Store connection pool management.
//!
//! The store handle is a SQLite connection pool initialized once per process
//! and passed explicitly into the orchestrator. Invocations do not overlap
//! under the deployment model, so the pool is shared but never contended.

use std::fs::OpenOptions;
use std::io::ErrorKind;
use std::sync::Arc;

use log::{error, info};
use sqlx::{Pool, Sqlite, SqlitePool};

use crate::error_handling::StoreError;

/// Initializes and returns the store connection pool.
///
/// Creates the database file if it doesn't exist and enables WAL mode. The
/// path comes from [`Config::resolved_store_path`], which selects the
/// local/test endpoint when the `LOCAL` flag is set.
///
/// [`Config::resolved_store_path`]: crate::Config::resolved_store_path
pub async fn init_store_pool(
    store_path: &std::path::Path,
) -> Result<Arc<Pool<Sqlite>>, StoreError> {
    let store_path_str = store_path.to_string_lossy().to_string();
    match OpenOptions::new()
        .read(true)
        .write(true)
        .create_new(true)
        .open(&store_path_str)
    {
        Ok(_) => info!("Store file created successfully."),
        Err(ref e) if e.kind() == ErrorKind::AlreadyExists => {
            info!("Store file already exists.")
        }
        Err(e) => {
            error!("Failed to create store file: {e}");
            return Err(StoreError::FileCreationError(e.to_string()));
        }
    }

    let pool = SqlitePool::connect(&format!("sqlite:{}", store_path_str))
        .await
        .map_err(|e| {
            error!("Failed to connect to store: {e}");
            StoreError::SqlError(e)
        })?;

    // Enable WAL mode
    sqlx::query("PRAGMA journal_mode=WAL")
        .execute(&pool)
        .await
        .map_err(|e| {
            error!("Failed to set WAL mode: {e}");
            StoreError::SqlError(e)
        })?;

    Ok(Arc::new(pool))
}
