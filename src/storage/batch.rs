//! Batch writer for normalized prices.
//!
//! Partitions the record sequence into consecutive chunks of at most
//! [`WRITE_BATCH_SIZE`] records and submits each chunk as one transactional
//! batch put. Every chunk is attempted: a sequence of N records always
//! becomes ceil(N/25) batch puts. An earlier implementation stopped after
//! the first chunk boundary and silently dropped the remainder; the tests
//! guard against that regression.
//!
//! A chunk that fails to persist is recorded by index and the loop moves
//! on. Only a store-level failure (connection lost, pool closed) aborts the
//! write early.

use log::{debug, error, warn};
use sqlx::SqlitePool;

use crate::config::{PRICES_TABLE, WRITE_BATCH_SIZE};
use crate::error_handling::UpdateError;
use crate::models::NormalizedPrice;

/// Summary of one batch-write pass over the full record sequence.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct WriteSummary {
    /// Total records in the input sequence.
    pub attempted: usize,
    /// Records confirmed written to the store.
    pub written: usize,
    /// Indices of chunks that failed to persist; empty on full success.
    pub failed_chunks: Vec<usize>,
}

/// Writes all normalized prices to the store in order, 25 records per
/// batch.
///
/// # Errors
///
/// Returns [`UpdateError::StoreWrite`] only when the store itself becomes
/// unusable; per-chunk failures are reported in the summary instead.
pub async fn write_prices(
    pool: &SqlitePool,
    prices: &[NormalizedPrice],
) -> Result<WriteSummary, UpdateError> {
    let mut summary = WriteSummary {
        attempted: prices.len(),
        written: 0,
        failed_chunks: Vec::new(),
    };

    debug!("Updating {} records in the store.", prices.len());

    for (index, chunk) in prices.chunks(WRITE_BATCH_SIZE).enumerate() {
        match write_chunk(pool, chunk).await {
            Ok(()) => {
                summary.written += chunk.len();
                debug!(
                    "Updated {}/{} records in the store.",
                    summary.written, summary.attempted
                );
            }
            Err(e) if is_fatal(&e) => {
                error!("Store became unusable while writing chunk {index}: {e}");
                return Err(UpdateError::StoreWrite(e));
            }
            Err(e) => {
                warn!("Failed to write chunk {index} ({} records): {e}", chunk.len());
                summary.failed_chunks.push(index);
            }
        }
    }

    if summary.failed_chunks.is_empty() {
        debug!("All {} records written.", summary.written);
    } else {
        warn!(
            "Write pass completed with {} failed chunk(s): {:?}",
            summary.failed_chunks.len(),
            summary.failed_chunks
        );
    }

    Ok(summary)
}

/// Submits one chunk as a single transaction, upserting each record keyed
/// by (site_id, fuel_id). The price is bound as exact decimal text.
async fn write_chunk(pool: &SqlitePool, chunk: &[NormalizedPrice]) -> Result<(), sqlx::Error> {
    let sql = format!(
        "INSERT INTO {PRICES_TABLE} \
         (site_id, fuel_id, collection_method, transaction_date_utc, price, updated_at) \
         VALUES (?1, ?2, ?3, ?4, ?5, datetime('now')) \
         ON CONFLICT (site_id, fuel_id) DO UPDATE SET \
         collection_method = excluded.collection_method, \
         transaction_date_utc = excluded.transaction_date_utc, \
         price = excluded.price, \
         updated_at = excluded.updated_at"
    );

    let mut tx = pool.begin().await?;

    for price in chunk {
        sqlx::query(&sql)
            .bind(price.site_id)
            .bind(price.fuel_id)
            .bind(price.collection_method.as_deref())
            .bind(price.transaction_date_utc.as_deref())
            .bind(price.price.to_string())
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await
}

/// Whether a store error means the store itself is unusable, as opposed to
/// one chunk being rejected.
fn is_fatal(e: &sqlx::Error) -> bool {
    matches!(
        e,
        sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::Protocol(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
    )
}
