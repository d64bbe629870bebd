//! Connector abstraction (driver-backed vs injected)

use super::config::ConnectionConfig;
use super::handle::{ConnectionHandle, DEFAULT_DATABASE};
use crate::Result;
use mongodb::options::ClientOptions;
use mongodb::Client;
use std::future::Future;

/// Opens a connection for a [`ConnectionManager`](crate::ConnectionManager)
///
/// The manager guarantees `connect` is never running twice at once for the
/// same manager. Implementations must not retry on their own.
pub trait Connector: Send + Sync {
    /// Open a connection and verify it is usable
    fn connect(
        &self,
        config: &ConnectionConfig,
    ) -> impl Future<Output = Result<ConnectionHandle>> + Send;
}

/// Connector backed by the official MongoDB driver
#[derive(Debug, Clone, Copy, Default)]
pub struct MongoConnector;

impl MongoConnector {
    /// Parse driver options and apply config overrides
    pub async fn client_options(config: &ConnectionConfig) -> Result<ClientOptions> {
        let mut options = ClientOptions::parse(&config.uri).await?;

        if let Some(ref app_name) = config.app_name {
            options.app_name = Some(app_name.clone());
        }
        if let Some(timeout) = config.connect_timeout {
            options.connect_timeout = Some(timeout);
        }
        if let Some(timeout) = config.server_selection_timeout {
            options.server_selection_timeout = Some(timeout);
        }

        Ok(options)
    }
}

impl Connector for MongoConnector {
    async fn connect(&self, config: &ConnectionConfig) -> Result<ConnectionHandle> {
        let options = Self::client_options(config).await?;

        let database = config
            .database
            .clone()
            .or_else(|| options.default_database.clone())
            .unwrap_or_else(|| DEFAULT_DATABASE.to_string());

        tracing::debug!(
            hosts = options.hosts.len(),
            database = %database,
            "building MongoDB client"
        );

        // Client construction is lazy; the ping is what actually reaches the
        // deployment
        let client = Client::with_options(options)?;
        let handle = ConnectionHandle::new(client, database);
        handle.ping().await?;

        tracing::debug!("ping acknowledged");
        Ok(handle)
    }
}
