//! Relay command implementation.

use anyhow::Result;
use tracing::info;

use crate::config::Config;
use crate::relay::{RelayServer, RelayState};

/// Start the relay. `port` and `host` override the config when given.
pub async fn run(config: &Config, port: Option<u16>, host: Option<String>) -> Result<()> {
    let port = port.unwrap_or(config.relay.port);
    let host = host.unwrap_or_else(|| config.relay.host.clone());

    let state = RelayState::new(&config.backend, &config.relay)?;

    info!(
        ask_timeout_secs = config.relay.ask_timeout_secs,
        health_timeout_secs = config.relay.health_timeout_secs,
        "Starting relay"
    );
    println!("Relay on http://{}:{} -> {}", host, port, config.backend.url);

    RelayServer::new(state).start(&host, port).await
}
