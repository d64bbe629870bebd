//! Integration tests for mongo-connect
//!
//! These tests require a running MongoDB instance. Set `MONGODB_URI` to point
//! elsewhere than `mongodb://localhost:27017/testdb`.
//!
//! Run with: cargo test --test integration -- --ignored

use mongo_connect::connection::{ConnectionConfig, ReadyState};
use mongo_connect::ConnectionManager;

fn test_uri() -> String {
    std::env::var("MONGODB_URI").unwrap_or_else(|_| "mongodb://localhost:27017/testdb".to_string())
}

#[tokio::test]
#[ignore] // Requires MongoDB running
async fn test_connect_and_ping() {
    let manager = ConnectionManager::new(ConnectionConfig::new(test_uri()));

    let handle = manager.ensure_connected().await.expect("connect");
    assert_eq!(manager.ready_state(), ReadyState::Connected);
    handle.ping().await.expect("ping");

    manager.close().await.expect("close");
}

#[tokio::test]
#[ignore] // Requires MongoDB running
async fn test_default_database_from_uri() {
    let manager = ConnectionManager::new(ConnectionConfig::new(
        "mongodb://localhost:27017/testdb",
    ));

    let handle = manager.ensure_connected().await.expect("connect");
    assert_eq!(handle.database_name(), "testdb");
    assert_eq!(handle.database().name(), "testdb");
}

#[tokio::test]
#[ignore] // Requires MongoDB running
async fn test_database_override() {
    let config = ConnectionConfig::builder(test_uri())
        .database("reports")
        .app_name("mongo-connect-tests")
        .build();
    let manager = ConnectionManager::new(config);

    let handle = manager.ensure_connected().await.expect("connect");
    assert_eq!(handle.database_name(), "reports");
}

#[tokio::test]
#[ignore] // Requires MongoDB running
async fn test_repeated_calls_return_same_client() {
    let manager = ConnectionManager::new(ConnectionConfig::new(test_uri()));

    let first = manager.ensure_connected().await.expect("first connect");
    let second = manager.ensure_connected().await.expect("second connect");

    assert!(std::ptr::eq(first, second));
    assert!(manager.is_connected());
}
