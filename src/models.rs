//! Data model for fuel-price records.
//!
//! [`SitePrice`] is the raw record as the pricing API serves it: the price
//! arrives as a bare JSON number (or string) and unknown descriptive fields
//! are carried through opaquely. [`NormalizedPrice`] is the same record
//! after the price has been parsed into an exact decimal; only normalized
//! records reach the store.

use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::{Map, Value};

/// Response envelope of the site-prices endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct PriceFeed {
    /// All site prices in the requested region.
    #[serde(rename = "SitePrices", default)]
    pub site_prices: Vec<SitePrice>,
}

/// One raw fuel-price entry from the pricing API.
#[derive(Debug, Clone, Deserialize)]
pub struct SitePrice {
    /// Identifier of the petrol station site.
    #[serde(rename = "SiteId")]
    pub site_id: i64,

    /// Identifier of the fuel type at the site.
    #[serde(rename = "FuelId")]
    pub fuel_id: i64,

    /// How the price was collected (e.g. "T" for transaction-derived).
    #[serde(rename = "CollectionMethod", default)]
    pub collection_method: Option<String>,

    /// UTC timestamp of the underlying transaction.
    #[serde(rename = "TransactionDateUtc", default)]
    pub transaction_date_utc: Option<String>,

    /// The raw price value as it appeared in the response body, either a
    /// JSON number or a string. Normalization parses this into a
    /// [`Decimal`]; absent or non-numeric values fail the invocation.
    #[serde(rename = "Price", default)]
    pub price: Option<Value>,

    /// Descriptive fields we pass through without interpreting (name,
    /// address, brand, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A fuel-price record whose price is held as an exact decimal.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedPrice {
    /// Identifier of the petrol station site.
    pub site_id: i64,
    /// Identifier of the fuel type at the site.
    pub fuel_id: i64,
    /// How the price was collected.
    pub collection_method: Option<String>,
    /// UTC timestamp of the underlying transaction.
    pub transaction_date_utc: Option<String>,
    /// Exact decimal price, parsed from the original textual
    /// representation. "1.099" stays exactly 1.099.
    pub price: Decimal,
}
