//! Subcommand implementations.

pub mod ask;
pub mod chat;
pub mod init;
pub mod serve;
pub mod status;

use anyhow::{Context, Result};
use std::io::Stdout;

use crate::backend::HttpBackend;
use crate::client::{QueryClient, TerminalView};
use crate::config::Config;

/// Query client over HTTP, rendering to stdout.
pub(crate) fn terminal_client(config: &Config) -> Result<QueryClient<HttpBackend, TerminalView<Stdout>>> {
    let backend = HttpBackend::new(&config.backend).context("Failed to set up backend client")?;
    let view = TerminalView::new(std::io::stdout(), &config.display);
    Ok(QueryClient::new(backend, view))
}
