//! Error types

use crate::connection::ReadyState;
use crate::metrics::labels;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

/// mongo-connect errors
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid or missing configuration (never reaches the network)
    #[error("configuration error: {0}")]
    Config(String),

    /// The driver could not build a client or reach the deployment
    #[error("connection error: {0}")]
    Connection(#[from] mongodb::error::Error),

    /// Illegal ready state transition
    #[error("invalid state: expected {expected}, got {actual}")]
    InvalidState {
        /// State the connection was expected to be in
        expected: String,
        /// State that was requested or observed
        actual: String,
    },
}

impl Error {
    /// True for configuration errors
    pub fn is_config(&self) -> bool {
        matches!(self, Error::Config(_))
    }

    /// True for driver connection errors
    pub fn is_connection(&self) -> bool {
        matches!(self, Error::Connection(_))
    }

    /// Underlying driver error, if this error came from the driver
    pub fn driver_error(&self) -> Option<&mongodb::error::Error> {
        match self {
            Error::Connection(e) => Some(e),
            _ => None,
        }
    }

    /// Short label used to tag failure metrics
    pub fn category(&self) -> &'static str {
        match self {
            Error::Config(_) => labels::REASON_CONFIG,
            Error::Connection(_) => labels::REASON_CONNECTION,
            Error::InvalidState { .. } => labels::REASON_INVALID_STATE,
        }
    }

    pub(crate) fn invalid_transition(from: ReadyState, to: ReadyState) -> Self {
        Error::InvalidState {
            expected: format!("valid transition from {}", from),
            actual: to.to_string(),
        }
    }
}
