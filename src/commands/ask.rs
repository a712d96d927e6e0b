use anyhow::Result;

use super::terminal_client;
use crate::config::Config;

/// Check the backend, then ask one question.
///
/// Returns whether an answer was rendered.
pub async fn run(config: &Config, words: &[String]) -> Result<bool> {
    let mut client = terminal_client(config)?;
    client.check_backend_status().await;

    let outcome = client.ask_question(&words.join(" ")).await;
    Ok(outcome.is_success())
}
