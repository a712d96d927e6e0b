//! Terminal rendering of the page.
//!
//! Regions are drawn when they are revealed. Hiding a region draws nothing,
//! so repeated hides leave the output untouched.

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::io::Write;
use std::time::Duration;
use tracing::warn;

use super::view::{BackendStatus, DocumentCard, Indicator, PageState, View};
use crate::api::DocumentRecord;
use crate::config::DisplayConfig;

/// Renders the page as lines of text on `W`.
pub struct TerminalView<W: Write> {
    out: W,
    page: PageState,
    spinner: Option<ProgressBar>,
    show_spinner: bool,
    snippet_lines: usize,
}

impl<W: Write> TerminalView<W> {
    pub fn new(out: W, display: &DisplayConfig) -> Self {
        Self {
            out,
            page: PageState::new(),
            spinner: None,
            show_spinner: display.spinner,
            snippet_lines: display.snippet_lines,
        }
    }

    /// The page model behind the rendered output.
    pub fn page(&self) -> &PageState {
        &self.page
    }

    pub fn into_inner(mut self) -> W {
        self.stop_spinner();
        self.out
    }

    fn emit(&mut self, text: &str) {
        if let Err(e) = writeln!(self.out, "{}", text).and_then(|_| self.out.flush()) {
            warn!(error = %e, "Failed to write to terminal");
        }
    }

    fn start_spinner(&mut self) {
        let target = if self.show_spinner {
            ProgressDrawTarget::stderr()
        } else {
            ProgressDrawTarget::hidden()
        };
        let spinner = ProgressBar::with_draw_target(None, target);
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
            spinner.set_style(style);
        }
        spinner.set_message("Thinking...");
        spinner.enable_steady_tick(Duration::from_millis(100));
        self.spinner = Some(spinner);
    }

    fn stop_spinner(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
    }

    fn render_results(&self) -> String {
        let results = &self.page.results;
        let mut text = format!("\nAnswer:\n{}\n", results.answer);

        if !results.documents.is_empty() {
            text.push_str(&format!(
                "\nRetrieved documents ({}):\n",
                results.documents.len()
            ));
            for card in &results.documents {
                text.push_str(&render_card(card, self.snippet_lines));
                text.push('\n');
            }
        }

        text
    }
}

impl<W: Write> View for TerminalView<W> {
    fn set_status(&mut self, status: BackendStatus) {
        self.page.set_status(status);
        let dot = match status.indicator() {
            Indicator::Online => "● online ",
            Indicator::Offline => "○ offline",
        };
        let line = format!("{}  {}", dot, status.label());
        self.emit(&line);
    }

    fn set_loading(&mut self, loading: bool) {
        if loading == self.page.is_loading() {
            return;
        }
        self.page.set_loading(loading);
        if loading {
            self.start_spinner();
        } else {
            self.stop_spinner();
        }
    }

    fn set_answer(&mut self, answer: &str) {
        self.page.set_answer(answer);
    }

    fn clear_documents(&mut self) {
        self.page.clear_documents();
    }

    fn append_document(&mut self, index: usize, document: &DocumentRecord) {
        self.page.append_document(index, document);
    }

    fn show_results(&mut self) {
        self.page.show_results();
        let text = self.render_results();
        self.emit(&text);
    }

    fn hide_results(&mut self) {
        self.page.hide_results();
    }

    fn show_error(&mut self, message: &str) {
        self.page.show_error(message);
        let line = format!("Error: {}", message);
        self.emit(&line);
    }

    fn hide_error(&mut self) {
        self.page.hide_error();
    }
}

fn render_card(card: &DocumentCard, max_lines: usize) -> String {
    format!(
        "{}. {}  {}\n{}",
        card.index,
        card.page_label(),
        card.link,
        format_preview(&card.snippet, max_lines)
    )
}

/// Indent the snippet, keeping at most `max_lines` lines
fn format_preview(content: &str, max_lines: usize) -> String {
    let lines: Vec<&str> = content.lines().collect();
    let mut preview: Vec<&str> = lines.iter().take(max_lines).copied().collect();
    if lines.len() > max_lines {
        preview.push("...");
    }

    preview
        .iter()
        .map(|line| format!("   {}", line))
        .collect::<Vec<_>>()
        .join("\n")
}
