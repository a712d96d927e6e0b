use askdocs::api::DocumentRecord;
use askdocs::backend::MockBackend;
use askdocs::client::{BackendStatus, PageState, View};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    Status(BackendStatus),
    /// Loading flag and the number of `ask` calls made at that moment.
    Loading { on: bool, asks_so_far: usize },
    Answer(String),
    ClearDocuments,
    Document(usize),
    ShowResults,
    HideResults,
    ShowError(String),
    HideError,
}

/// View that keeps a page model and logs every call it receives.
pub struct RecordingView {
    pub page: PageState,
    pub events: Vec<ViewEvent>,
    backend: MockBackend,
}

impl RecordingView {
    /// `backend` is observed so loading transitions can be placed relative
    /// to the request.
    pub fn new(backend: &MockBackend) -> Self {
        Self {
            page: PageState::new(),
            events: Vec::new(),
            backend: backend.clone(),
        }
    }

    pub fn loading_events(&self) -> Vec<(bool, usize)> {
        self.events
            .iter()
            .filter_map(|e| match e {
                ViewEvent::Loading { on, asks_so_far } => Some((*on, *asks_so_far)),
                _ => None,
            })
            .collect()
    }
}

impl View for RecordingView {
    fn set_status(&mut self, status: BackendStatus) {
        self.page.set_status(status);
        self.events.push(ViewEvent::Status(status));
    }

    fn set_loading(&mut self, loading: bool) {
        self.page.set_loading(loading);
        self.events.push(ViewEvent::Loading {
            on: loading,
            asks_so_far: self.backend.ask_count(),
        });
    }

    fn set_answer(&mut self, answer: &str) {
        self.page.set_answer(answer);
        self.events.push(ViewEvent::Answer(answer.to_string()));
    }

    fn clear_documents(&mut self) {
        self.page.clear_documents();
        self.events.push(ViewEvent::ClearDocuments);
    }

    fn append_document(&mut self, index: usize, document: &DocumentRecord) {
        self.page.append_document(index, document);
        self.events.push(ViewEvent::Document(index));
    }

    fn show_results(&mut self) {
        self.page.show_results();
        self.events.push(ViewEvent::ShowResults);
    }

    fn hide_results(&mut self) {
        self.page.hide_results();
        self.events.push(ViewEvent::HideResults);
    }

    fn show_error(&mut self, message: &str) {
        self.page.show_error(message);
        self.events.push(ViewEvent::ShowError(message.to_string()));
    }

    fn hide_error(&mut self) {
        self.page.hide_error();
        self.events.push(ViewEvent::HideError);
    }
}
