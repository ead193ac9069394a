//! Process-wide resource initialization.
//!
//! This module provides initialization for resources created once per
//! process lifetime:
//! - Logger setup with custom formatting
//! - HTTP client construction

mod client;
mod logger;

pub use client::init_client;
pub use logger::init_logger_with;
