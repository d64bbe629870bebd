//! Client API
//!
//! The connection manager and connection string inspection.

mod connection_manager;
mod connection_string;

pub use connection_manager::ConnectionManager;
pub use connection_string::{ConnectionInfo, Scheme};
