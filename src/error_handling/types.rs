//! Error type definitions.
//!
//! This module defines all error types used throughout the application.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Error types for store operations.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Error creating the store database file.
    #[error("Store file creation error: {0}")]
    FileCreationError(String),

    /// SQL execution error.
    #[error("SQL error: {0}")]
    SqlError(#[from] sqlx::Error),
}

/// Failures of a single update invocation.
///
/// Each variant maps to a response status code: `Upstream` relays the code
/// the pricing API answered with, everything else surfaces as 500. A chunk
/// that fails to persist is not an `UpdateError` - it is recorded in the
/// [`WriteSummary`](crate::WriteSummary) and the invocation still completes.
#[derive(Error, Debug)]
pub enum UpdateError {
    /// The pricing API answered with a non-200 status. Recoverable; the
    /// external scheduler will re-trigger the update.
    #[error("upstream pricing API returned status {0}")]
    Upstream(u16),

    /// A price field was missing or not parseable as a number. Fatal to the
    /// invocation; nothing is written.
    #[error("price conversion error: {0}")]
    Conversion(String),

    /// The store became unusable mid-write (connection lost, pool closed).
    #[error("store write error: {0}")]
    StoreWrite(#[source] sqlx::Error),

    /// The transport to the pricing API failed (timeout, DNS, connection
    /// refused) or a 200 body could not be decoded.
    #[error("network error reaching upstream: {0}")]
    Network(#[from] ReqwestError),
}

impl UpdateError {
    /// The response status code this error surfaces as.
    pub fn status_code(&self) -> u16 {
        match self {
            UpdateError::Upstream(code) => *code,
            _ => 500,
        }
    }
}
