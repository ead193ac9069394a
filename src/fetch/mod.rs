//! Fetching site prices from the upstream pricing API.

use log::{info, warn};
use reqwest::header::AUTHORIZATION;
use reqwest::StatusCode;

use crate::config::{Config, SITE_PRICES_PATH, SITE_PRICES_QUERY};
use crate::error_handling::UpdateError;
use crate::models::{PriceFeed, SitePrice};

/// Outcome of a single fetch attempt.
///
/// A non-200 answer from the API is a clean outcome, not an error; only
/// transport-level failures raise [`UpdateError::Network`].
#[derive(Debug)]
pub enum Fetched {
    /// The API answered 200; these are the records from `SitePrices`.
    Prices(Vec<SitePrice>),
    /// The API answered with this non-200 status. No records.
    Upstream(u16),
}

/// Issues one authenticated GET to the site-prices endpoint.
///
/// The query parameters select the configured region scope and the API key
/// is sent as the `Authorization` header. The request honors the timeout
/// the shared client was built with.
///
/// # Errors
///
/// Returns [`UpdateError::Network`] if the transport cannot complete
/// (timeout, DNS, connection refused) or if a 200 body cannot be decoded.
pub async fn fetch_site_prices(
    client: &reqwest::Client,
    config: &Config,
) -> Result<Fetched, UpdateError> {
    let url = format!("{}{}", config.base_url.trim_end_matches('/'), SITE_PRICES_PATH);
    info!("Sending site-prices request to {url}");

    let response = client
        .get(&url)
        .query(&SITE_PRICES_QUERY)
        .header(AUTHORIZATION, config.api_key.as_str())
        .send()
        .await?;

    let status = response.status();
    if status != StatusCode::OK {
        warn!("Upstream answered {status} for site-prices request.");
        return Ok(Fetched::Upstream(status.as_u16()));
    }

    let feed: PriceFeed = response.json().await?;
    info!("Fetched {} site prices.", feed.site_prices.len());
    Ok(Fetched::Prices(feed.site_prices))
}
