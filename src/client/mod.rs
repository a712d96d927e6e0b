//! The query client: status check, question submission and rendering.
//!
//! [`QueryClient`] owns a backend and a view. Every operation takes
//! `&mut self`, so one request at most is in flight per client and a late
//! reply can never overwrite the result of a newer question.

pub mod input;
pub mod terminal;
pub mod view;

pub use input::{InputBuffer, InputEvent};
pub use terminal::TerminalView;
pub use view::{BackendStatus, DocumentCard, Indicator, PageState, UiState, View};

use std::ops::{Deref, DerefMut};
use tracing::{debug, info, warn};

use crate::api::{AnswerResult, Question, QuestionError};
use crate::backend::{BackendError, QaBackend};

/// Shown when the backend rejects a question without saying why.
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred while processing your question";

/// Shown when the request could not complete.
pub const CONNECTION_ERROR_MESSAGE: &str =
    "Failed to connect to the server. Please make sure the backend is running.";

/// How a submission ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AskOutcome {
    /// An answer was rendered with this many documents.
    Answered { documents: usize },
    /// Input was rejected before any request was made.
    Invalid(QuestionError),
    /// The request failed; `message` is what the user was shown.
    Failed { message: String },
}

impl AskOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, AskOutcome::Answered { .. })
    }
}

/// Drives a [`View`] from a [`QaBackend`].
pub struct QueryClient<B, V> {
    backend: B,
    view: V,
}

impl<B: QaBackend, V: View> QueryClient<B, V> {
    pub fn new(backend: B, view: V) -> Self {
        Self { backend, view }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn into_parts(self) -> (B, V) {
        (self.backend, self.view)
    }

    /// Check backend liveness once and update the status indicator.
    ///
    /// Failures only change the indicator; no error is shown.
    pub async fn check_backend_status(&mut self) -> BackendStatus {
        let status = match self.backend.health().await {
            Ok(health) if health.is_ready() => BackendStatus::Ready,
            Ok(health) => {
                debug!(
                    status = %health.status,
                    vector_db_loaded = health.vector_db_loaded,
                    "Backend reachable but not ready"
                );
                BackendStatus::NotReady
            }
            Err(e) => {
                debug!(error = %e, "Health check failed");
                BackendStatus::Offline
            }
        };

        info!(backend = self.backend.backend_name(), ?status, "Backend status checked");
        self.view.set_status(status);
        status
    }

    /// Validate `input`, submit it and render whatever comes back.
    ///
    /// The submit control is re-enabled on every exit path once a request
    /// has been dispatched.
    pub async fn ask_question(&mut self, input: &str) -> AskOutcome {
        let question = match Question::parse(input) {
            Ok(q) => q,
            Err(e) => {
                self.show_error(&e.to_string());
                return AskOutcome::Invalid(e);
            }
        };

        let mut view = Loading::start(&mut self.view);
        view.hide_results();
        view.hide_error();

        let reply = self.backend.ask(&question).await;
        match reply {
            Ok(result) => {
                let documents = result.retrieved_documents.len();
                render_into(&mut *view, &result);
                info!(documents, "Question answered");
                AskOutcome::Answered { documents }
            }
            Err(e) => {
                let message = user_message(&e);
                warn!(error = %e, "Question failed");
                view.show_error(&message);
                AskOutcome::Failed { message }
            }
        }
    }

    /// Replace the results region with `result` and reveal it.
    pub fn render_results(&mut self, result: &AnswerResult) {
        render_into(&mut self.view, result);
    }

    pub fn show_error(&mut self, message: &str) {
        self.view.show_error(message);
    }

    pub fn hide_error(&mut self) {
        self.view.hide_error();
    }

    pub fn hide_results(&mut self) {
        self.view.hide_results();
    }
}

/// Keeps the view in its loading state until dropped.
///
/// Dropping the `ask_question` future mid-request still re-enables the
/// submit control.
struct Loading<'a, V: View> {
    view: &'a mut V,
}

impl<'a, V: View> Loading<'a, V> {
    fn start(view: &'a mut V) -> Self {
        view.set_loading(true);
        Self { view }
    }
}

impl<V: View> Deref for Loading<'_, V> {
    type Target = V;

    fn deref(&self) -> &V {
        &*self.view
    }
}

impl<V: View> DerefMut for Loading<'_, V> {
    fn deref_mut(&mut self) -> &mut V {
        &mut *self.view
    }
}

impl<V: View> Drop for Loading<'_, V> {
    fn drop(&mut self) {
        self.view.set_loading(false);
    }
}

fn render_into<V: View>(view: &mut V, result: &AnswerResult) {
    view.set_answer(&result.answer);
    view.clear_documents();
    for (i, document) in result.retrieved_documents.iter().enumerate() {
        view.append_document(i + 1, document);
    }
    view.show_results();
}

/// Message shown to the user for a failed request.
fn user_message(error: &BackendError) -> String {
    match error {
        BackendError::Application { message, .. } => message
            .clone()
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string()),
        _ => CONNECTION_ERROR_MESSAGE.to_string(),
    }
}
