//! Access to the question-answering backend.
//!
//! `QaBackend` is the seam between the query client and the network.
//! `HttpBackend` talks to a live service; `MockBackend` replays scripted
//! replies and records calls for tests.

pub mod http;
pub mod mock;

pub use http::{join_endpoint, HttpBackend};
pub use mock::{BackendCall, MockBackend};

use async_trait::async_trait;
use thiserror::Error;

use crate::api::{AnswerResult, HealthStatus, Question};

/// Failure of a backend call.
#[derive(Error, Debug)]
pub enum BackendError {
    /// The request never completed (DNS, refused connection, timeout).
    #[error("Request failed: {0}")]
    Transport(String),

    /// A response arrived but its body was not the expected JSON.
    #[error("Malformed response body: {0}")]
    InvalidBody(String),

    /// The backend answered with a non-success status.
    #[error("Backend returned {status}")]
    Application {
        status: u16,
        /// The body's `error` field, when present.
        message: Option<String>,
    },

    /// The configured base URL cannot be joined with an endpoint path.
    #[error("Invalid backend URL: {0}")]
    InvalidUrl(String),
}

impl BackendError {
    /// The request did not yield a usable backend answer at all.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            BackendError::Transport(_) | BackendError::InvalidBody(_) | BackendError::InvalidUrl(_)
        )
    }
}

/// Operations the query client needs from a backend.
#[async_trait]
pub trait QaBackend: Send + Sync {
    /// `GET /health`. Any parseable body is returned regardless of status.
    async fn health(&self) -> Result<HealthStatus, BackendError>;

    /// `POST /ask` with `{question}`.
    async fn ask(&self, question: &Question) -> Result<AnswerResult, BackendError>;

    /// Name for logging
    fn backend_name(&self) -> &str;
}
