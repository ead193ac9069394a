//! Numeric normalization of price fields.
//!
//! Prices arrive from the API as JSON floats (or occasionally strings) and
//! must be persisted without floating-point rounding artifacts. Parsing the
//! original textual representation into a [`Decimal`] keeps "1.099" exactly
//! 1.099 rather than 1.0989999....

use log::debug;
use rust_decimal::Decimal;
use serde_json::Value;

use crate::error_handling::UpdateError;
use crate::models::{NormalizedPrice, SitePrice};

/// Normalizes a fetched price sequence into exact-decimal records.
///
/// Consumes the raw records; order is preserved. Fails with
/// [`UpdateError::Conversion`] on the first record whose price field is
/// absent or not parseable as a number - nothing is written in that case.
pub fn normalize_prices(raw: Vec<SitePrice>) -> Result<Vec<NormalizedPrice>, UpdateError> {
    debug!("Converting {} prices to decimal.", raw.len());

    raw.into_iter()
        .map(|record| {
            let price = parse_price(record.price.as_ref()).map_err(|reason| {
                UpdateError::Conversion(format!(
                    "site {} fuel {}: {}",
                    record.site_id, record.fuel_id, reason
                ))
            })?;

            Ok(NormalizedPrice {
                site_id: record.site_id,
                fuel_id: record.fuel_id,
                collection_method: record.collection_method,
                transaction_date_utc: record.transaction_date_utc,
                price,
            })
        })
        .collect()
}

/// Parses a raw JSON price value into a decimal.
///
/// JSON numbers are rendered back to their shortest round-trip text before
/// parsing, so the decimal matches the digits that were on the wire.
fn parse_price(value: Option<&Value>) -> Result<Decimal, String> {
    match value {
        None | Some(Value::Null) => Err("missing Price field".to_string()),
        Some(Value::Number(n)) => n
            .to_string()
            .parse::<Decimal>()
            .map_err(|e| format!("unparseable numeric price {n}: {e}")),
        Some(Value::String(s)) => s
            .trim()
            .parse::<Decimal>()
            .map_err(|e| format!("unparseable price string {s:?}: {e}")),
        Some(other) => Err(format!("price is not a number: {other}")),
    }
}
