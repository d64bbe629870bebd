//! Connection smoke test
//!
//! Loads `.env`, reads the connection URI from the environment, connects once
//! and exits. Exit status is 0 on success and 1 on any failure.
//!
//! ```bash
//! MONGODB_URI=mongodb://localhost:27017/testdb mongo-smoke
//! RUST_LOG=debug mongo-smoke --env-file staging.env --var STAGING_MONGODB_URI
//! ```

use clap::Parser;
use mongo_connect::connection::{ConnectionConfig, DEFAULT_URI_VAR};
use mongo_connect::{ConnectionManager, Result};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "mongo-smoke", version, about = "Check that a MongoDB deployment is reachable")]
struct Args {
    /// Load variables from this file instead of ./.env
    #[arg(long)]
    env_file: Option<PathBuf>,

    /// Environment variable holding the connection URI
    #[arg(long = "var", default_value = DEFAULT_URI_VAR)]
    uri_var: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = load_env(args.env_file.as_deref()) {
        tracing::error!(error = %e, "failed to load environment file");
        return ExitCode::FAILURE;
    }

    match run(&args.uri_var).await {
        Ok(()) => {
            tracing::info!("database connection successful");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "database connection failed");
            ExitCode::FAILURE
        }
    }
}

/// Explicit file must exist; the implicit ./.env is optional
fn load_env(path: Option<&std::path::Path>) -> std::result::Result<(), dotenvy::Error> {
    match path {
        Some(path) => {
            dotenvy::from_path(path)?;
            tracing::debug!(path = %path.display(), "loaded environment file");
        }
        None => match dotenvy::dotenv() {
            Ok(path) => tracing::debug!(path = %path.display(), "loaded environment file"),
            Err(e) if e.not_found() => tracing::debug!("no .env file found"),
            Err(e) => return Err(e),
        },
    }
    Ok(())
}

async fn run(uri_var: &str) -> Result<()> {
    let config = ConnectionConfig::from_env_var(uri_var)?;
    tracing::info!(var = uri_var, uri = %config.redacted_uri(), "loaded connection string");

    let manager = ConnectionManager::new(config);
    let handle = manager.ensure_connected().await?;
    tracing::info!(database = %handle.database_name(), state = %manager.ready_state(), "ping ok");

    manager.close().await
}
