//! Connection configuration

use crate::client::ConnectionInfo;
use crate::{Error, Result};
use std::time::Duration;

/// Environment variable read by [`ConnectionConfig::from_env`]
pub const DEFAULT_URI_VAR: &str = "MONGODB_URI";

/// Optional application name override
pub const APP_NAME_VAR: &str = "MONGODB_APP_NAME";

/// Optional default database override
pub const DATABASE_VAR: &str = "MONGODB_DATABASE";

/// Connection configuration
///
/// Holds the connection URI plus a few fixed overrides. Anything left as
/// `None` keeps the driver default (or whatever the URI itself says).
/// Use `ConnectionConfig::builder()` to set overrides.
#[derive(Debug, Clone)]
pub struct ConnectionConfig {
    /// Connection URI
    pub uri: String,
    /// Application name reported to the server
    pub app_name: Option<String>,
    /// Default database (overrides the URI path)
    pub database: Option<String>,
    /// TCP connect timeout
    pub connect_timeout: Option<Duration>,
    /// How long to wait for a suitable server before failing
    pub server_selection_timeout: Option<Duration>,
}

impl ConnectionConfig {
    /// Create new configuration with driver defaults
    ///
    /// The URI is not validated here; [`ConnectionConfig::validate`] runs on
    /// every connect attempt.
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            app_name: None,
            database: None,
            connect_timeout: None,
            server_selection_timeout: None,
        }
    }

    /// Create a builder for advanced configuration
    ///
    /// # Examples
    ///
    /// ```
    /// use mongo_connect::connection::ConnectionConfig;
    /// use std::time::Duration;
    ///
    /// let config = ConnectionConfig::builder("mongodb://localhost:27017/app")
    ///     .app_name("billing")
    ///     .server_selection_timeout(Duration::from_secs(5))
    ///     .build();
    /// assert_eq!(config.app_name.as_deref(), Some("billing"));
    /// ```
    pub fn builder(uri: impl Into<String>) -> ConnectionConfigBuilder {
        ConnectionConfigBuilder {
            config: Self::new(uri),
        }
    }

    /// Load configuration from `MONGODB_URI`
    ///
    /// `MONGODB_APP_NAME` and `MONGODB_DATABASE` are honored when set.
    pub fn from_env() -> Result<Self> {
        Self::from_env_var(DEFAULT_URI_VAR)
    }

    /// Load configuration, reading the URI from `var`
    pub fn from_env_var(var: &str) -> Result<Self> {
        Self::load(var, APP_NAME_VAR, DATABASE_VAR)
    }

    fn load(var: &str, app_name_var: &str, database_var: &str) -> Result<Self> {
        let uri = match std::env::var(var) {
            Ok(uri) => uri,
            Err(std::env::VarError::NotPresent) => {
                return Err(Error::Config(format!(
                    "environment variable {} is not set",
                    var
                )))
            }
            Err(std::env::VarError::NotUnicode(_)) => {
                return Err(Error::Config(format!(
                    "environment variable {} is not valid unicode",
                    var
                )))
            }
        };

        if uri.trim().is_empty() {
            return Err(Error::Config(format!(
                "environment variable {} is empty",
                var
            )));
        }

        let mut config = Self::new(uri);
        config.app_name = non_empty_var(app_name_var);
        config.database = non_empty_var(database_var);
        Ok(config)
    }

    /// Check the URI without touching the network
    pub fn validate(&self) -> Result<ConnectionInfo> {
        if self.uri.trim().is_empty() {
            return Err(Error::Config("connection URI is missing or empty".into()));
        }
        if matches!(self.database.as_deref(), Some(db) if db.trim().is_empty()) {
            return Err(Error::Config("database override is empty".into()));
        }
        ConnectionInfo::parse(&self.uri)
    }

    /// URI with credentials masked, for logs
    pub fn redacted_uri(&self) -> String {
        match ConnectionInfo::parse(&self.uri) {
            Ok(info) => info.redacted(),
            Err(_) => "<invalid connection string>".to_string(),
        }
    }
}

fn non_empty_var(var: &str) -> Option<String> {
    std::env::var(var).ok().filter(|v| !v.trim().is_empty())
}

/// Builder for creating `ConnectionConfig` with overrides
#[derive(Debug, Clone)]
pub struct ConnectionConfigBuilder {
    config: ConnectionConfig,
}

impl ConnectionConfigBuilder {
    /// Set application name reported in server logs
    pub fn app_name(mut self, name: impl Into<String>) -> Self {
        self.config.app_name = Some(name.into());
        self
    }

    /// Set default database, overriding the URI path
    pub fn database(mut self, name: impl Into<String>) -> Self {
        self.config.database = Some(name.into());
        self
    }

    /// Set TCP connect timeout
    ///
    /// Default: None (driver default)
    pub fn connect_timeout(mut self, duration: Duration) -> Self {
        self.config.connect_timeout = Some(duration);
        self
    }

    /// Set server selection timeout
    ///
    /// Default: None (driver default, 30 seconds)
    ///
    /// This bounds how long an unreachable deployment takes to fail.
    pub fn server_selection_timeout(mut self, duration: Duration) -> Self {
        self.config.server_selection_timeout = Some(duration);
        self
    }

    /// Build the configuration
    pub fn build(self) -> ConnectionConfig {
        self.config
    }
}
