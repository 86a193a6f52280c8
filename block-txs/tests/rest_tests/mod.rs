//! Integration tests running the full flow against a stub REST service
//!
//! The real reqwest transport talks to an actix-web server bound to an
//! ephemeral local port, so no live network is needed.

use serde_json::json;
use std::sync::Once;
use tracing_subscriber::EnvFilter;

use block_txs::{config::Config, error::FetchError, transport::HttpTransport};

use helpers::{spawn_stub, unreachable_url, Reply};

const ZERO_BYTE_HASH: &str = "6e340b9cffb37a989ca544e6bb780a2c78901d3fb33738768511a30617afa01d";

static INIT: Once = Once::new();

/// Initializes the global logger (only once).
fn init_logger() {
    INIT.call_once(|| {
        let filter = EnvFilter::from_default_env()
            .add_directive("block_txs=debug".parse().unwrap())
            .add_directive("actix_web=error".parse().unwrap())
            .add_directive("hyper=warn".parse().unwrap())
            .add_directive("reqwest=warn".parse().unwrap());
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .init();
    });
}

fn config_for(rest_url: &str) -> Config {
    Config {
        rest_url: rest_url.to_string(),
        block_height: 11260637,
    }
}

#[actix_web::test]
async fn test_single_transaction_block() {
    init_logger();

    let stub = spawn_stub(
        Reply::Json(json!({"block": {"data": {"txs": ["AA=="]}}})),
        Reply::Json(json!({"foo": "bar"})),
    );

    let details = block_txs::run(&config_for(&stub.base_url), HttpTransport::new().unwrap())
        .await
        .expect("run failed")
        .expect("block has a transaction");

    // Exactly one block request and one transaction request for the derived hash.
    assert_eq!(stub.block_requests(), vec!["11260637".to_string()]);
    assert_eq!(stub.tx_requests(), vec![ZERO_BYTE_HASH.to_string()]);

    assert_eq!(
        serde_json::to_value(&details).unwrap(),
        json!({ ZERO_BYTE_HASH: {"foo": "bar"} })
    );

    stub.stop().await;
}

#[actix_web::test]
async fn test_empty_block() {
    init_logger();

    let stub = spawn_stub(
        Reply::Json(json!({"block": {"data": {"txs": []}}})),
        Reply::Json(json!({"foo": "bar"})),
    );

    let result = block_txs::run(&config_for(&stub.base_url), HttpTransport::new().unwrap())
        .await
        .expect("run failed");

    assert!(result.is_none());
    assert!(stub.tx_requests().is_empty());

    stub.stop().await;
}

#[actix_web::test]
async fn test_multiple_transactions() {
    init_logger();

    let stub = spawn_stub(
        Reply::Json(json!({"block": {"data": {"txs": ["AA==", "AQ==", "Ag=="]}}})),
        Reply::Json(json!({"tx_response": {"code": 0}})),
    );

    let details = block_txs::run(&config_for(&stub.base_url), HttpTransport::new().unwrap())
        .await
        .expect("run failed")
        .expect("block has transactions");

    assert_eq!(details.len(), 3);
    let mut requested = stub.tx_requests();
    requested.sort();
    let mut keys: Vec<String> = details.keys().map(|hash| hash.to_string()).collect();
    keys.sort();
    assert_eq!(requested, keys);

    stub.stop().await;
}

#[actix_web::test]
async fn test_transaction_http_error() {
    init_logger();

    let stub = spawn_stub(
        Reply::Json(json!({"block": {"data": {"txs": ["AA==", "AQ=="]}}})),
        Reply::Status(500),
    );

    let err = block_txs::run(&config_for(&stub.base_url), HttpTransport::new().unwrap())
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::HttpStatus { status: 500, .. }));

    stub.stop().await;
}

#[actix_web::test]
async fn test_block_not_json() {
    init_logger();

    let stub = spawn_stub(Reply::Text("<html>maintenance</html>"), Reply::Json(json!({})));

    let err = block_txs::run(&config_for(&stub.base_url), HttpTransport::new().unwrap())
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::Parse { .. }));
    assert!(stub.tx_requests().is_empty());

    stub.stop().await;
}

#[actix_web::test]
async fn test_unreachable_service() {
    init_logger();

    let err = block_txs::run(&config_for(&unreachable_url()), HttpTransport::new().unwrap())
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::Transport { .. }));
}
