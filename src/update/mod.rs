//! Update orchestrator: fetch, convert, write.
//!
//! One invocation walks the phases `Fetching -> Converting -> Writing` in
//! strict sequence and maps the outcome to a response: 200 on completion
//! (partial chunk failures included in the summary body), the upstream
//! status code when the fetch came back non-200, and 500 for everything
//! else. No retries; the external scheduler re-triggers the function on a
//! fixed interval.

use log::{debug, error, info};
use serde_json::json;
use sqlx::SqlitePool;

use crate::config::Config;
use crate::convert::normalize_prices;
use crate::error_handling::UpdateError;
use crate::fetch::{fetch_site_prices, Fetched};
use crate::storage::write_prices;

/// Phases of one update invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for an invocation.
    Idle,
    /// Requesting prices from the upstream API.
    Fetching,
    /// Normalizing prices to exact decimals.
    Converting,
    /// Submitting record batches to the store.
    Writing,
    /// The invocation completed (possibly with partial chunk failures).
    Done,
    /// The invocation failed; nothing further was attempted.
    Failed,
}

impl Phase {
    /// Phase name used in logs and failure bodies.
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Fetching => "fetching",
            Phase::Converting => "converting",
            Phase::Writing => "writing",
            Phase::Done => "done",
            Phase::Failed => "failed",
        }
    }
}

/// Response of one update invocation.
///
/// Mirrors the gateway contract: a status code plus a JSON string body.
#[derive(Debug, Clone)]
pub struct UpdateResponse {
    /// HTTP status code of the outcome.
    pub status_code: u16,
    /// JSON-serialized outcome summary.
    pub body: String,
}

/// Runs one fetch-convert-write invocation.
///
/// The store pool and HTTP client are process-wide resources passed in
/// explicitly; the invocation itself holds no state that outlives it.
pub async fn run_update(
    client: &reqwest::Client,
    pool: &SqlitePool,
    config: &Config,
) -> UpdateResponse {
    info!("Starting price update.");

    let mut phase = advance(Phase::Idle, Phase::Fetching);

    let fetched = match fetch_site_prices(client, config).await {
        Ok(fetched) => fetched,
        Err(e) => return failure(phase, e),
    };

    let raw = match fetched {
        Fetched::Prices(prices) => prices,
        Fetched::Upstream(status) => {
            // Clean non-200 from the API: relay the code, write nothing.
            return failure(phase, UpdateError::Upstream(status));
        }
    };

    phase = advance(phase, Phase::Converting);
    let normalized = match normalize_prices(raw) {
        Ok(normalized) => normalized,
        Err(e) => return failure(phase, e),
    };

    phase = advance(phase, Phase::Writing);
    let summary = match write_prices(pool, &normalized).await {
        Ok(summary) => summary,
        Err(e) => return failure(phase, e),
    };

    advance(phase, Phase::Done);
    info!(
        "Update done: {}/{} records written, {} failed chunk(s).",
        summary.written,
        summary.attempted,
        summary.failed_chunks.len()
    );

    UpdateResponse {
        status_code: 200,
        body: json!({
            "message": format!("{} records updated.", summary.written),
            "attempted": summary.attempted,
            "written": summary.written,
            "failed_chunks": summary.failed_chunks,
        })
        .to_string(),
    }
}

/// Records a phase transition and returns the new phase.
fn advance(from: Phase, to: Phase) -> Phase {
    debug!("Phase {} -> {}.", from.as_str(), to.as_str());
    to
}

fn failure(phase: Phase, error: UpdateError) -> UpdateResponse {
    advance(phase, Phase::Failed);
    error!("Update failed while {}: {error}", phase.as_str());

    UpdateResponse {
        status_code: error.status_code(),
        body: json!({
            "message": error.to_string(),
            "phase": phase.as_str(),
        })
        .to_string(),
    }
}
