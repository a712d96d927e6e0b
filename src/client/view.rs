//! Display surface of the query client.
//!
//! [`View`] lists the page regions the client drives: a status indicator, a
//! submit control, a results region and an error region. [`PageState`] is
//! the headless model of those regions; renderers keep one and draw from it.

use crate::api::DocumentRecord;

/// Visual state of the status dot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indicator {
    Online,
    Offline,
}

/// Outcome of a backend status check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendStatus {
    /// Healthy and the vector store is loaded.
    Ready,
    /// Reachable but not ready to answer.
    NotReady,
    /// Unreachable or answering garbage.
    Offline,
}

impl BackendStatus {
    pub fn indicator(&self) -> Indicator {
        match self {
            BackendStatus::Ready => Indicator::Online,
            BackendStatus::NotReady | BackendStatus::Offline => Indicator::Offline,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BackendStatus::Ready => "System Ready",
            BackendStatus::NotReady => "System Not Ready",
            BackendStatus::Offline => "Backend Offline",
        }
    }
}

/// Mutually exclusive display phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiState {
    Idle,
    Loading,
    ResultsShown,
    ErrorShown,
}

/// Page regions driven by the query client.
pub trait View {
    fn set_status(&mut self, status: BackendStatus);

    /// Disable the submit control and show the loader, or undo that.
    fn set_loading(&mut self, loading: bool);

    fn set_answer(&mut self, answer: &str);

    fn clear_documents(&mut self);

    /// Append one document card. `index` is 1-based and for display only.
    fn append_document(&mut self, index: usize, document: &DocumentRecord);

    fn show_results(&mut self);

    fn hide_results(&mut self);

    fn show_error(&mut self, message: &str);

    fn hide_error(&mut self);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitControl {
    pub enabled: bool,
    pub loader_visible: bool,
}

impl Default for SubmitControl {
    fn default() -> Self {
        Self {
            enabled: true,
            loader_visible: false,
        }
    }
}

/// Rendered document card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentCard {
    pub index: usize,
    pub page: String,
    pub link: String,
    pub snippet: String,
}

impl DocumentCard {
    pub fn page_label(&self) -> String {
        format!("Page {}", self.page)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultsRegion {
    pub visible: bool,
    pub answer: String,
    pub documents: Vec<DocumentCard>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorRegion {
    pub visible: bool,
    pub message: String,
}

/// Headless model of the page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageState {
    pub status: Option<BackendStatus>,
    pub submit: SubmitControl,
    pub results: ResultsRegion,
    pub error: ErrorRegion,
}

impl PageState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loading(&self) -> bool {
        !self.submit.enabled
    }

    /// Current display phase. An error outranks stale results.
    pub fn ui_state(&self) -> UiState {
        if self.is_loading() {
            UiState::Loading
        } else if self.error.visible {
            UiState::ErrorShown
        } else if self.results.visible {
            UiState::ResultsShown
        } else {
            UiState::Idle
        }
    }
}

impl View for PageState {
    fn set_status(&mut self, status: BackendStatus) {
        self.status = Some(status);
    }

    fn set_loading(&mut self, loading: bool) {
        self.submit.enabled = !loading;
        self.submit.loader_visible = loading;
    }

    fn set_answer(&mut self, answer: &str) {
        self.results.answer = answer.to_string();
    }

    fn clear_documents(&mut self) {
        self.results.documents.clear();
    }

    fn append_document(&mut self, index: usize, document: &DocumentRecord) {
        self.results.documents.push(DocumentCard {
            index,
            page: document.page.to_string(),
            link: document.link.clone(),
            snippet: document.snippet.clone(),
        });
    }

    fn show_results(&mut self) {
        self.results.visible = true;
    }

    fn hide_results(&mut self) {
        self.results.visible = false;
    }

    fn show_error(&mut self, message: &str) {
        self.error.message = message.to_string();
        self.error.visible = true;
    }

    fn hide_error(&mut self) {
        self.error.visible = false;
    }
}
