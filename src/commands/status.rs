//! Status command: a single backend health check.

use anyhow::Result;

use super::terminal_client;
use crate::client::BackendStatus;
use crate::config::Config;

/// Run the status check. Returns whether the backend is ready.
pub async fn run(config: &Config) -> Result<bool> {
    let mut client = terminal_client(config)?;
    let status = client.check_backend_status().await;

    if status != BackendStatus::Ready {
        println!("  backend: {}", config.backend.url);
    }

    Ok(status == BackendStatus::Ready)
}
