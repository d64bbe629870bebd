//! Connection management
//!
//! This module handles:
//! * Configuration loading and validation
//! * Ready state enforcement
//! * Opening connections through the driver (or an injected connector)

mod config;
mod connector;
mod handle;
mod state;

pub use config::{
    ConnectionConfig, ConnectionConfigBuilder, APP_NAME_VAR, DATABASE_VAR, DEFAULT_URI_VAR,
};
pub use connector::{Connector, MongoConnector};
pub use handle::{ConnectionHandle, DEFAULT_DATABASE};
pub use state::ReadyState;
