//! Shared state of the relay.

use anyhow::{Context, Result};
use reqwest::Client;
use std::time::Duration;
use url::Url;

use crate::backend::{join_endpoint, BackendError};
use crate::config::{BackendConfig, RelayConfig};

/// Cloned into every handler; the reqwest client pools connections internally.
#[derive(Clone)]
pub struct RelayState {
    pub client: Client,
    pub backend_url: Url,
    pub ask_timeout: Duration,
    pub health_timeout: Duration,
}

impl RelayState {
    pub fn new(backend: &BackendConfig, relay: &RelayConfig) -> Result<Self> {
        let backend_url = Url::parse(&backend.url)
            .with_context(|| format!("Invalid backend URL: {}", backend.url))?;
        let client = Client::builder()
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            backend_url,
            ask_timeout: Duration::from_secs(relay.ask_timeout_secs),
            health_timeout: Duration::from_secs(relay.health_timeout_secs),
        })
    }

    /// Backend URL for an endpoint path.
    pub fn endpoint(&self, path: &str) -> Result<Url, BackendError> {
        join_endpoint(&self.backend_url, path)
    }
}
