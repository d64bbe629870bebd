//! Idempotent, lazily established MongoDB connections
//!
//! A [`ConnectionManager`] owns a single connection to a MongoDB deployment.
//! The first call to [`ConnectionManager::ensure_connected`] builds a driver
//! client and verifies it with a `ping`; every later call returns the same
//! handle without touching the network. Concurrent first calls share one
//! attempt.
//!
//! ```no_run
//! # async fn example() -> mongo_connect::Result<()> {
//! use mongo_connect::{connection::ConnectionConfig, ConnectionManager};
//!
//! let manager = ConnectionManager::new(ConnectionConfig::new("mongodb://localhost:27017/testdb"));
//! let handle = manager.ensure_connected().await?;
//! assert_eq!(handle.database_name(), "testdb");
//!
//! // Second call is a no-op
//! manager.ensure_connected().await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod connection;
pub mod error;
pub mod metrics;

pub use client::ConnectionManager;
pub use error::{Error, Result};
