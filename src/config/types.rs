//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument
//! parsing and configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_TIMEOUT_SECS, FUEL_API_BASE_URL, LOCAL_STORE_PATH, STORE_PATH,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to
/// most verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Application configuration.
///
/// Parsed from the command line (with env fallbacks) by the binary, or
/// constructed programmatically for library usage.
///
/// # Examples
///
/// ```no_run
/// use fuel_sync::Config;
///
/// let config = Config {
///     api_key: "secret".to_string(),
///     timeout_seconds: 5,
///     ..Default::default()
/// };
/// ```
#[derive(Parser, Debug, Clone)]
#[command(
    name = "fuel_sync",
    about = "Fetches SA fuel prices and persists them in a SQLite-backed price store."
)]
pub struct Config {
    /// SAFPIS API key. Injected secret; there is no default.
    #[arg(long, env = "FUEL_API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// Base URL of the upstream pricing API
    #[arg(long, default_value = FUEL_API_BASE_URL)]
    pub base_url: String,

    /// Per-request timeout in seconds for the upstream API
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// Path of the store database file (production endpoint)
    #[arg(long, default_value = STORE_PATH)]
    pub store_path: PathBuf,

    /// Use the local/test store endpoint instead of the production one
    #[arg(long, env = "LOCAL")]
    pub local: bool,

    /// Serve the HTTP entry points on this port; without it the update
    /// pipeline runs once and the process exits
    #[arg(long)]
    pub port: Option<u16>,

    /// Log level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value = "plain")]
    pub log_format: LogFormat,
}

impl Config {
    /// Resolves the store path, honoring the local/test endpoint flag.
    pub fn resolved_store_path(&self) -> PathBuf {
        if self.local {
            log::info!("Using local store endpoint.");
            PathBuf::from(LOCAL_STORE_PATH)
        } else {
            self.store_path.clone()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: FUEL_API_BASE_URL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            store_path: PathBuf::from(STORE_PATH),
            local: false,
            port: None,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}
