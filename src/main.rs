//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `fuel_sync` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - Choosing between serve mode and a single scheduler-style invocation
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use fuel_sync::initialization::{init_client, init_logger_with};
use fuel_sync::server::{serve, AppState};
use fuel_sync::storage::{init_store_pool, run_migrations};
use fuel_sync::{run_update, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file (if it exists). This allows
    // setting FUEL_API_KEY in .env without exporting it manually.
    let _ = dotenvy::dotenv();

    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    let pool = init_store_pool(&config.resolved_store_path())
        .await
        .context("Failed to initialize store pool")?;
    run_migrations(&pool)
        .await
        .context("Failed to run store migrations")?;
    let client = init_client(&config)
        .await
        .context("Failed to initialize HTTP client")?;

    match config.port {
        Some(port) => {
            let state = AppState {
                client,
                pool,
                config: std::sync::Arc::new(config),
            };
            serve(port, state).await?;
        }
        None => {
            // One scheduler-style invocation: run the pipeline and exit.
            let response = run_update(&client, &pool, &config).await;
            println!("{} {}", response.status_code, response.body);
            if response.status_code != 200 {
                process::exit(1);
            }
        }
    }

    Ok(())
}
