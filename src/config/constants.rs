//! Configuration constants.
//!
//! Endpoint and store constants for the fuel-price update pipeline. The
//! upstream values (base URL, query scope, batch size) come from the SAFPIS
//! integration and are fixed; everything user-tunable lives on [`Config`].
//!
//! [`Config`]: super::Config

/// Base URL of the SAFPIS fuel pricing API.
pub const FUEL_API_BASE_URL: &str =
    "https://fppdirectapi-prod.safuelpricinginformation.com.au";

/// Path of the site-prices endpoint, relative to [`FUEL_API_BASE_URL`].
pub const SITE_PRICES_PATH: &str = "/Price/GetSitesPrices";

/// Fixed query scope selecting South Australia.
///
/// `countryId=21`, `geoRegionLevel=3`, `geoRegionId=4` per the SAFPIS
/// direct-API documentation.
pub const SITE_PRICES_QUERY: [(&str, &str); 3] = [
    ("countryId", "21"),
    ("geoRegionLevel", "3"),
    ("geoRegionId", "4"),
];

/// Maximum number of records submitted to the store in one batch put.
pub const WRITE_BATCH_SIZE: usize = 25;

/// Name of the price table in the store.
pub const PRICES_TABLE: &str = "current_fuel_prices";

/// Default store database path (production endpoint).
pub const STORE_PATH: &str = "./fuel_prices.db";

/// Store database path used when the `LOCAL` flag selects the local/test
/// endpoint.
pub const LOCAL_STORE_PATH: &str = "./fuel_prices_local.db";

/// Default per-request timeout in seconds for the upstream API.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
