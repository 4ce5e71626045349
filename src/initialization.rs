//! Shared initialization helpers for the logger and HTTP client.

use std::sync::Arc;
use std::time::Duration;

use log::LevelFilter;
use reqwest::ClientBuilder;

use crate::config::DEFAULT_USER_AGENT;
use crate::error_handling::InitializationError;

/// Initializes the global logger at `level`.
///
/// Respects `RUST_LOG` when set, so the environment can still raise or lower
/// verbosity per module.
pub fn init_logger(level: LevelFilter) -> Result<(), InitializationError> {
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .try_init()?;
    Ok(())
}

/// Builds the shared HTTP client with an explicit timeout and a
/// crate-identifying User-Agent (the Overpass API asks clients to identify
/// themselves).
pub fn init_client(timeout: Duration) -> Result<Arc<reqwest::Client>, InitializationError> {
    let client = ClientBuilder::new()
        .timeout(timeout)
        .user_agent(DEFAULT_USER_AGENT)
        .build()?;
    Ok(Arc::new(client))
}
