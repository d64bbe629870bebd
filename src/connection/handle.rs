//! Live connection handle

use crate::Result;
use mongodb::bson::doc;
use mongodb::{Client, Database};

/// Database used when neither the URI nor the config names one
pub const DEFAULT_DATABASE: &str = "test";

/// A live MongoDB connection
///
/// Wraps the driver client, which is itself a cheap, reference-counted handle
/// onto the driver's connection pool. Clone freely.
#[derive(Debug, Clone)]
pub struct ConnectionHandle {
    client: Client,
    database: String,
}

impl ConnectionHandle {
    /// Wrap an existing driver client
    pub fn new(client: Client, database: impl Into<String>) -> Self {
        Self {
            client,
            database: database.into(),
        }
    }

    /// Driver client
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Name of the default database
    pub fn database_name(&self) -> &str {
        &self.database
    }

    /// Default database
    pub fn database(&self) -> Database {
        self.client.database(&self.database)
    }

    /// Round-trip a `ping` command through the admin database
    pub async fn ping(&self) -> Result<()> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await?;
        Ok(())
    }

    /// Shut the driver client down, closing pooled connections
    pub async fn shutdown(self) {
        self.client.shutdown().await;
    }
}
