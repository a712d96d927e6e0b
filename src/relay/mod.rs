//! Same-origin relay in front of the backend.
//!
//! A browser page served next to this relay calls `/health` and `/ask` on
//! its own origin. The relay forwards both to the configured backend with
//! fixed timeouts and turns backend failures into JSON error bodies.
//!
//! # Example
//!
//! ```rust,ignore
//! use askdocs::relay::{RelayServer, RelayState};
//!
//! let state = RelayState::new(&config.backend, &config.relay)?;
//! RelayServer::new(state).start(&config.relay.host, config.relay.port).await?;
//! ```

pub mod handlers;
pub mod routes;
pub mod state;

pub use state::RelayState;

use anyhow::{Context, Result};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::metrics;

pub struct RelayServer {
    state: RelayState,
}

impl RelayServer {
    pub fn new(state: RelayState) -> Self {
        Self { state }
    }

    /// Router with CORS applied, ready to serve.
    pub fn router(&self) -> Router {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        routes::create_router(self.state.clone()).layer(cors)
    }

    /// Bind `host:port` and serve until the process is stopped.
    pub async fn start(self, host: &str, port: u16) -> Result<()> {
        let addr = format!("{}:{}", host, port);
        let listener = TcpListener::bind(&addr)
            .await
            .with_context(|| format!("Failed to bind to {}", addr))?;

        self.serve(listener).await
    }

    /// Serve on an already bound listener.
    pub async fn serve(self, listener: TcpListener) -> Result<()> {
        metrics::register_metrics();

        let local = listener
            .local_addr()
            .context("Failed to read listener address")?;
        info!("Relay listening on http://{}", local);
        info!("Forwarding to {}", self.state.backend_url);

        axum::serve(listener, self.router())
            .await
            .with_context(|| "Relay server failed")?;

        Ok(())
    }
}
