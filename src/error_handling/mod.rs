//! Error handling for the update pipeline.
//!
//! This module provides the error taxonomy used throughout the application:
//! - **Upstream**: the pricing API answered with a non-200 status
//! - **Conversion**: a price field could not be normalized
//! - **StoreWrite**: the store itself became unusable mid-write
//! - **Network**: the transport to the pricing API failed
//!
//! Initialization and store-level failures carry their own enums so callers
//! can distinguish startup problems from pipeline problems.

mod types;

// Re-export public API
pub use types::{InitializationError, StoreError, UpdateError};
