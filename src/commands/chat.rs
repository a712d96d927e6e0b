//! Interactive question session.
//!
//! Mirrors a page lifecycle: the backend status is checked once on start,
//! then every submitted line goes through `ask_question`.

use anyhow::{Context, Result};
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::debug;

use super::terminal_client;
use crate::backend::QaBackend;
use crate::client::{InputBuffer, InputEvent, QueryClient, View};
use crate::config::Config;

const PROMPT: &str = "> ";
const CONTINUATION_PROMPT: &str = "… ";

/// Counters reported when a session ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub submitted: usize,
    pub answered: usize,
}

/// Run the session on stdin/stdout.
pub async fn run(config: &Config) -> Result<()> {
    let mut client = terminal_client(config)?;

    println!("Ask a question and press Enter. End a line with \\ to continue it.");
    println!("Type :examples for sample questions, :status to re-check the backend, :quit to exit.\n");

    let stdin = BufReader::new(tokio::io::stdin());
    let summary = run_session(
        &mut client,
        stdin,
        &mut std::io::stderr(),
        &config.display.examples,
    )
    .await?;

    debug!(?summary, "Chat session ended");
    Ok(())
}

/// Drive `client` from `input` until `:quit` or end of input.
///
/// Prompts and the `:examples` listing go to `prompt_out`; everything else
/// is rendered by the view. `:example N` asks the Nth of `examples`.
pub async fn run_session<B, V, R, P>(
    client: &mut QueryClient<B, V>,
    input: R,
    prompt_out: &mut P,
    examples: &[String],
) -> Result<SessionSummary>
where
    B: QaBackend,
    V: View,
    R: AsyncBufRead + Unpin,
    P: Write,
{
    let mut summary = SessionSummary::default();
    let mut buffer = InputBuffer::new();
    let mut lines = input.lines();

    client.check_backend_status().await;

    loop {
        let prompt = if buffer.is_continuing() {
            CONTINUATION_PROMPT
        } else {
            PROMPT
        };
        write!(prompt_out, "{}", prompt).context("Failed to write prompt")?;
        prompt_out.flush().context("Failed to write prompt")?;

        let line = match lines.next_line().await.context("Failed to read input")? {
            Some(line) => line,
            None => {
                if let Some(rest) = buffer.flush() {
                    submit(client, &rest, &mut summary).await;
                }
                break;
            }
        };

        if !buffer.is_continuing() {
            match line.trim() {
                ":quit" | ":q" => break,
                ":status" => {
                    client.check_backend_status().await;
                    continue;
                }
                ":examples" => {
                    list_examples(prompt_out, examples)?;
                    continue;
                }
                command if command.starts_with(":example ") => {
                    let arg = command[":example ".len()..].trim();
                    match pick_example(examples, arg) {
                        Some(question) => submit(client, question, &mut summary).await,
                        None => writeln!(prompt_out, "No example {}; try :examples", arg)
                            .context("Failed to write prompt")?,
                    }
                    continue;
                }
                _ => {}
            }
        }

        if let InputEvent::Submit(text) = buffer.feed(&line) {
            submit(client, &text, &mut summary).await;
        }
    }

    Ok(summary)
}

fn list_examples<P: Write>(out: &mut P, examples: &[String]) -> Result<()> {
    if examples.is_empty() {
        writeln!(out, "No example questions configured").context("Failed to write prompt")?;
        return Ok(());
    }
    for (i, question) in examples.iter().enumerate() {
        writeln!(out, "  {}. {}", i + 1, question).context("Failed to write prompt")?;
    }
    Ok(())
}

/// 1-based lookup of an example question.
fn pick_example<'a>(examples: &'a [String], arg: &str) -> Option<&'a str> {
    let n: usize = arg.parse().ok()?;
    examples.get(n.checked_sub(1)?).map(String::as_str)
}

async fn submit<B: QaBackend, V: View>(
    client: &mut QueryClient<B, V>,
    text: &str,
    summary: &mut SessionSummary,
) {
    summary.submitted += 1;
    if client.ask_question(text).await.is_success() {
        summary.answered += 1;
    }
}
