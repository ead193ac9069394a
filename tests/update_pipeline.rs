//! Integration tests for the update pipeline.
//!
//! These tests verify the orchestration logic end to end against a mocked
//! upstream API and an in-memory store:
//! - a healthy fetch writes every record, not just the first batch
//! - upstream failures relay their status code and write nothing
//! - malformed prices abort before any write

mod helpers;

use helpers::{count_prices, create_test_config, create_test_pool};

use serde_json::{json, Value};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use fuel_sync::run_update;

/// Builds a SitePrices body with `n` records priced `189.9`.
fn price_feed(n: usize) -> Value {
    let prices: Vec<Value> = (0..n)
        .map(|i| {
            json!({
                "SiteId": i as i64 + 1,
                "FuelId": 2,
                "CollectionMethod": "T",
                "TransactionDateUtc": "2023-10-27T05:11:11.663",
                "Price": 189.9
            })
        })
        .collect();
    json!({ "SitePrices": prices })
}

async fn mock_upstream(response: ResponseTemplate) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/Price/GetSitesPrices"))
        .and(query_param("countryId", "21"))
        .and(query_param("geoRegionLevel", "3"))
        .and(query_param("geoRegionId", "4"))
        .and(header("Authorization", "test-key"))
        .respond_with(response)
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn test_sixty_records_are_all_written() {
    // Regression guard for the batch loop: 60 records means three batches
    // of [25, 25, 10], all of which must land in the store.
    let server = mock_upstream(ResponseTemplate::new(200).set_body_json(price_feed(60))).await;
    let pool = create_test_pool().await;
    let config = create_test_config(server.uri());
    let client = reqwest::Client::new();

    let response = run_update(&client, &pool, &config).await;

    assert_eq!(response.status_code, 200);
    assert_eq!(count_prices(&pool).await, 60);

    let body: Value = serde_json::from_str(&response.body).unwrap();
    assert_eq!(body["attempted"], 60);
    assert_eq!(body["written"], 60);
    assert_eq!(body["failed_chunks"], json!([]));
    assert_eq!(body["message"], "60 records updated.");
}

#[tokio::test]
async fn test_partial_chunk_failure_still_reports_done() {
    // A rejected chunk is partial failure, not invocation failure: the
    // response stays 200 and the summary carries the failed chunk index.
    let server = mock_upstream(ResponseTemplate::new(200).set_body_json(price_feed(60))).await;
    let pool = create_test_pool().await;
    sqlx::query(
        "CREATE TRIGGER reject_mid_sites BEFORE INSERT ON current_fuel_prices \
         WHEN NEW.site_id BETWEEN 26 AND 50 \
         BEGIN SELECT RAISE(ABORT, 'site rejected'); END",
    )
    .execute(&pool)
    .await
    .unwrap();
    let config = create_test_config(server.uri());
    let client = reqwest::Client::new();

    let response = run_update(&client, &pool, &config).await;

    assert_eq!(response.status_code, 200);
    assert_eq!(count_prices(&pool).await, 35);

    let body: Value = serde_json::from_str(&response.body).unwrap();
    assert_eq!(body["attempted"], 60);
    assert_eq!(body["written"], 35);
    assert_eq!(body["failed_chunks"], json!([1]));
}

#[tokio::test]
async fn test_upstream_404_relays_status_and_writes_nothing() {
    let server = mock_upstream(ResponseTemplate::new(404)).await;
    let pool = create_test_pool().await;
    let config = create_test_config(server.uri());
    let client = reqwest::Client::new();

    let response = run_update(&client, &pool, &config).await;

    assert_eq!(response.status_code, 404);
    assert_eq!(count_prices(&pool).await, 0);

    let body: Value = serde_json::from_str(&response.body).unwrap();
    assert_eq!(body["phase"], "fetching");
}

#[tokio::test]
async fn test_upstream_503_relays_status() {
    let server = mock_upstream(ResponseTemplate::new(503)).await;
    let pool = create_test_pool().await;
    let config = create_test_config(server.uri());
    let client = reqwest::Client::new();

    let response = run_update(&client, &pool, &config).await;
    assert_eq!(response.status_code, 503);
    assert_eq!(count_prices(&pool).await, 0);
}

#[tokio::test]
async fn test_missing_price_field_aborts_before_any_write() {
    // One record in the second batch has no Price: the whole invocation
    // must fail in the converting phase with zero rows written.
    let mut feed = price_feed(40);
    feed["SitePrices"][30].as_object_mut().unwrap().remove("Price");

    let server = mock_upstream(ResponseTemplate::new(200).set_body_json(feed)).await;
    let pool = create_test_pool().await;
    let config = create_test_config(server.uri());
    let client = reqwest::Client::new();

    let response = run_update(&client, &pool, &config).await;

    assert_eq!(response.status_code, 500);
    assert_eq!(count_prices(&pool).await, 0);

    let body: Value = serde_json::from_str(&response.body).unwrap();
    assert_eq!(body["phase"], "converting");
}

#[tokio::test]
async fn test_string_prices_survive_exactly() {
    let feed = json!({
        "SitePrices": [
            { "SiteId": 7, "FuelId": 2, "Price": "1.099" }
        ]
    });
    let server = mock_upstream(ResponseTemplate::new(200).set_body_json(feed)).await;
    let pool = create_test_pool().await;
    let config = create_test_config(server.uri());
    let client = reqwest::Client::new();

    let response = run_update(&client, &pool, &config).await;
    assert_eq!(response.status_code, 200);

    let stored: String =
        sqlx::query_scalar("SELECT price FROM current_fuel_prices WHERE site_id = 7")
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(stored, "1.099");
}

#[tokio::test]
async fn test_transport_failure_surfaces_as_500() {
    // Point the config at a closed port: the transport error must surface
    // as a 500, not be swallowed. An exclusive (non-pooled) server is
    // required here: pooled servers keep listening after drop.
    let server = MockServer::builder().start().await;
    let uri = server.uri();
    drop(server);

    let pool = create_test_pool().await;
    let config = create_test_config(uri);
    let client = reqwest::Client::new();

    let response = run_update(&client, &pool, &config).await;

    assert_eq!(response.status_code, 500);
    assert_eq!(count_prices(&pool).await, 0);

    let body: Value = serde_json::from_str(&response.body).unwrap();
    assert_eq!(body["phase"], "fetching");
}

#[tokio::test]
async fn test_empty_feed_completes_with_zero_writes() {
    let server = mock_upstream(ResponseTemplate::new(200).set_body_json(price_feed(0))).await;
    let pool = create_test_pool().await;
    let config = create_test_config(server.uri());
    let client = reqwest::Client::new();

    let response = run_update(&client, &pool, &config).await;

    assert_eq!(response.status_code, 200);
    let body: Value = serde_json::from_str(&response.body).unwrap();
    assert_eq!(body["attempted"], 0);
    assert_eq!(body["written"], 0);
}
