//! Route table of the relay.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers;
use super::state::RelayState;

/// Create the relay router.
pub fn create_router(state: RelayState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/ask", post(handlers::ask))
        .route("/metrics", get(handlers::metrics_handler))
        .with_state(state)
}
