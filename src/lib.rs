pub mod api;
pub mod backend;
pub mod cli;
pub mod client;
pub mod commands;
pub mod config;
pub mod logging;
pub mod metrics;
pub mod relay;

pub use backend::{BackendError, HttpBackend, QaBackend};
pub use client::{AskOutcome, QueryClient};
pub use config::Config;
