//! Read access to the price store.

use sqlx::SqlitePool;

use crate::config::PRICES_TABLE;

/// One stored price row, as served by the read endpoint.
///
/// The price is the exact decimal text the batch writer persisted; it is
/// served back verbatim rather than re-parsed through a float.
#[derive(Debug, Clone, sqlx::FromRow, serde::Serialize)]
pub struct StoredPrice {
    /// Identifier of the petrol station site.
    pub site_id: i64,
    /// Identifier of the fuel type at the site.
    pub fuel_id: i64,
    /// How the price was collected.
    pub collection_method: Option<String>,
    /// UTC timestamp of the underlying transaction.
    pub transaction_date_utc: Option<String>,
    /// Exact decimal price text.
    pub price: String,
}

/// Reads back every stored price, ordered by key.
pub async fn read_prices(pool: &SqlitePool) -> Result<Vec<StoredPrice>, sqlx::Error> {
    let sql = format!(
        "SELECT site_id, fuel_id, collection_method, transaction_date_utc, price \
         FROM {PRICES_TABLE} ORDER BY site_id, fuel_id"
    );
    sqlx::query_as(&sql).fetch_all(pool).await
}
