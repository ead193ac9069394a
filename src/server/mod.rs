//! HTTP entry points.
//!
//! Provides three entry points:
//! - `GET /update` - runs the update pipeline and relays its outcome
//! - `GET /prices` - reads back every stored price as JSON
//! - `GET /hello` - fixed greeting, answers 200 regardless of store or
//!   upstream state
//!
//! The server is optional; in the scheduler-triggered deployment the binary
//! runs the pipeline once and exits instead.

use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use sqlx::SqlitePool;

use crate::config::Config;
use crate::storage::read_prices;
use crate::update::run_update;

/// Process-wide resources shared by the HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    /// Shared HTTP client for upstream requests.
    pub client: Arc<reqwest::Client>,
    /// Store connection pool.
    pub pool: Arc<SqlitePool>,
    /// Application configuration.
    pub config: Arc<Config>,
}

/// Builds the application router with both entry points.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/update", get(update_handler))
        .route("/prices", get(prices_handler))
        .route("/hello", get(hello_handler))
        .with_state(state)
}

/// Creates and starts the HTTP server.
pub async fn serve(port: u16, state: AppState) -> Result<(), anyhow::Error> {
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", port))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind server to port {}: {}", port, e))?;

    log::info!("Listening on http://127.0.0.1:{}/", port);
    log::info!("  - Update: http://127.0.0.1:{}/update", port);
    log::info!("  - Prices: http://127.0.0.1:{}/prices", port);
    log::info!("  - Hello: http://127.0.0.1:{}/hello", port);

    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    Ok(())
}

/// Runs the update pipeline and relays its status code and JSON body.
async fn update_handler(State(state): State<AppState>) -> Response {
    let result = run_update(&state.client, &state.pool, &state.config).await;

    let status =
        StatusCode::from_u16(result.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        result.body,
    )
        .into_response()
}

/// Serves every stored price as a JSON array.
async fn prices_handler(State(state): State<AppState>) -> Response {
    match read_prices(&state.pool).await {
        Ok(prices) => (StatusCode::OK, Json(prices)).into_response(),
        Err(e) => {
            log::error!("Failed to read prices from the store: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "message": "error while reading prices." })),
            )
                .into_response()
        }
    }
}

/// Fixed greeting entry point.
pub async fn hello_handler() -> Response {
    (StatusCode::OK, Json(json!({ "message": "hello world" }))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[tokio::test]
    async fn test_hello_handler_always_greets() {
        // No store, no upstream involved: the greeting must not depend on
        // either.
        let response = hello_handler().await;
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["message"], "hello world");
    }
}
