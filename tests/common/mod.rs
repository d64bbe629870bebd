//! Shared test connectors

#![allow(dead_code)]

use mongo_connect::connection::{ConnectionConfig, ConnectionHandle, Connector};
use mongo_connect::{Error, Result};
use mongodb::options::ClientOptions;
use mongodb::Client;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Connector that never talks to a server
///
/// Builds a real driver client (construction is lazy and does no I/O) so the
/// handle is genuine, and counts how often it was asked to connect.
#[derive(Default)]
pub struct CountingConnector {
    calls: AtomicUsize,
    /// Fail this many calls before succeeding
    pub fail_first: usize,
    /// Simulated handshake latency
    pub delay: Option<Duration>,
}

impl CountingConnector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_first(n: usize) -> Self {
        Self {
            fail_first: n,
            ..Self::default()
        }
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Connector for CountingConnector {
    async fn connect(&self, config: &ConnectionConfig) -> Result<ConnectionHandle> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        if call < self.fail_first {
            return Err(driver_error().await);
        }

        let options = ClientOptions::parse(&config.uri).await?;
        let database = options
            .default_database
            .clone()
            .unwrap_or_else(|| "test".to_string());
        let client = Client::with_options(options)?;
        Ok(ConnectionHandle::new(client, database))
    }
}

/// A genuine driver error, produced without network I/O
pub async fn driver_error() -> Error {
    match ClientOptions::parse("mongodb://localhost:notaport").await {
        Ok(_) => panic!("driver accepted an invalid port"),
        Err(e) => Error::from(e),
    }
}
