//! ConnectionManager implementation

use super::connection_string::ConnectionInfo;
use crate::connection::{
    ConnectionConfig, ConnectionHandle, Connector, MongoConnector, ReadyState,
};
use crate::metrics::labels;
use crate::Result;
use std::sync::{Mutex, PoisonError};
use std::time::Instant;
use tokio::sync::OnceCell;
use tracing::Instrument;

/// Lazily connects to MongoDB, at most once
///
/// Construct one per process (or per deployment) and share it by reference
/// or `Arc`. The first [`ensure_connected`](Self::ensure_connected) call opens
/// the connection; later calls return the same handle.
pub struct ConnectionManager<C = MongoConnector> {
    config: ConnectionConfig,
    connector: C,
    state: Mutex<ReadyState>,
    handle: OnceCell<ConnectionHandle>,
}

impl ConnectionManager<MongoConnector> {
    /// Create a manager backed by the MongoDB driver
    ///
    /// No I/O happens until the first `ensure_connected` call.
    pub fn new(config: ConnectionConfig) -> Self {
        Self::with_connector(config, MongoConnector)
    }

    /// Create a manager from `MONGODB_URI`
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # async fn example() -> mongo_connect::Result<()> {
    /// use mongo_connect::ConnectionManager;
    ///
    /// let manager = ConnectionManager::from_env()?;
    /// let handle = manager.ensure_connected().await?;
    /// println!("using {}", handle.database_name());
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(ConnectionConfig::from_env()?))
    }
}

impl<C: Connector> ConnectionManager<C> {
    /// Create a manager with a custom connector
    pub fn with_connector(config: ConnectionConfig, connector: C) -> Self {
        Self {
            config,
            connector,
            state: Mutex::new(ReadyState::Disconnected),
            handle: OnceCell::new(),
        }
    }

    /// Configuration this manager connects with
    pub fn config(&self) -> &ConnectionConfig {
        &self.config
    }

    /// Connector this manager opens connections with
    pub fn connector(&self) -> &C {
        &self.connector
    }

    /// Current ready state
    pub fn ready_state(&self) -> ReadyState {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// True once a connection has been established
    pub fn is_connected(&self) -> bool {
        self.ready_state().is_connected()
    }

    /// Live handle, if connected
    pub fn handle(&self) -> Option<&ConnectionHandle> {
        self.handle.get()
    }

    /// Connect if not already connected
    ///
    /// Safe to call repeatedly and concurrently. Callers that arrive while an
    /// attempt is in flight wait for it instead of starting their own. A
    /// failed attempt is not retried here and leaves the manager
    /// disconnected; the next call makes a fresh attempt.
    ///
    /// An empty or malformed URI fails with [`Error::Config`](crate::Error::Config)
    /// before any network I/O.
    pub async fn ensure_connected(&self) -> Result<&ConnectionHandle> {
        let info = match self.config.validate() {
            Ok(info) => info,
            Err(e) => {
                tracing::error!(error = %e, "refusing to connect");
                crate::metrics::counters::connect_failed(e.category());
                return Err(e);
            }
        };

        if let Some(handle) = self.handle.get() {
            tracing::info!(database = %handle.database_name(), "already connected to MongoDB");
            crate::metrics::counters::connect_reused();
            return Ok(handle);
        }

        self.handle
            .get_or_try_init(|| self.connect_once(&info))
            .await
    }

    /// Run one connect attempt, tracking ready state around it
    async fn connect_once(&self, info: &ConnectionInfo) -> Result<ConnectionHandle> {
        async {
            self.transition(ReadyState::Connecting)?;
            let mut guard = AttemptGuard::new(&self.state);
            crate::metrics::counters::connect_attempted();
            tracing::info!("connecting to MongoDB");

            let start = Instant::now();
            let result = self.connector.connect(&self.config).await;
            let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
            guard.disarm();

            match result {
                Ok(handle) => {
                    self.transition(ReadyState::Connected)?;
                    crate::metrics::counters::connect_successful();
                    crate::metrics::histograms::connect_duration(
                        labels::OUTCOME_SUCCESS,
                        elapsed_ms,
                    );
                    tracing::info!(
                        database = %handle.database_name(),
                        elapsed_ms,
                        "connected to MongoDB"
                    );
                    Ok(handle)
                }
                Err(e) => {
                    self.transition(ReadyState::Disconnected)?;
                    crate::metrics::counters::connect_failed(e.category());
                    crate::metrics::histograms::connect_duration(labels::OUTCOME_ERROR, elapsed_ms);
                    tracing::error!(error = %e, elapsed_ms, "MongoDB connection error");
                    Err(e)
                }
            }
        }
        .instrument(tracing::info_span!("ensure_connected", uri = %info))
        .await
    }

    fn transition(&self, next: ReadyState) -> Result<()> {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        let prev = *state;
        state.transition(next)?;
        tracing::debug!(from = %prev, to = %next, "ready state changed");
        Ok(())
    }

    /// Close the connection, if one was opened
    ///
    /// Consumes the manager. Does nothing when never connected.
    pub async fn close(self) -> Result<()> {
        self.disconnect().await
    }

    async fn disconnect(&self) -> Result<()> {
        if !self.is_connected() {
            return Ok(());
        }

        self.transition(ReadyState::Disconnecting)?;
        if let Some(handle) = self.handle.get() {
            handle.clone().shutdown().await;
        }
        self.transition(ReadyState::Disconnected)?;
        tracing::info!("MongoDB connection closed");
        Ok(())
    }
}

/// Resets `Connecting` to `Disconnected` if an attempt is dropped mid-flight
struct AttemptGuard<'a> {
    state: &'a Mutex<ReadyState>,
    armed: bool,
}

impl<'a> AttemptGuard<'a> {
    fn new(state: &'a Mutex<ReadyState>) -> Self {
        Self { state, armed: true }
    }

    fn disarm(&mut self) {
        self.armed = false;
    }
}

impl Drop for AttemptGuard<'_> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        if state.transition(ReadyState::Disconnected).is_ok() {
            crate::metrics::counters::connect_failed(labels::REASON_CANCELLED);
            tracing::warn!("connect attempt cancelled");
        }
    }
}

impl<C> std::fmt::Debug for ConnectionManager<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectionManager")
            .field("uri", &self.config.redacted_uri())
            .field(
                "state",
                &*self.state.lock().unwrap_or_else(PoisonError::into_inner),
            )
            .finish()
    }
}
