use askdocs::api::{AnswerResult, DocumentRecord, HealthStatus, PageRef};
use askdocs::backend::{BackendCall, BackendError, MockBackend};
use askdocs::client::{
    AskOutcome, BackendStatus, Indicator, QueryClient, UiState, CONNECTION_ERROR_MESSAGE,
};

use crate::helpers::recording_view::{RecordingView, ViewEvent};

fn setup() -> (MockBackend, QueryClient<MockBackend, RecordingView>) {
    let backend = MockBackend::new();
    let view = RecordingView::new(&backend);
    (backend.clone(), QueryClient::new(backend, view))
}

fn health(status: &str, loaded: bool) -> HealthStatus {
    HealthStatus {
        status: status.to_string(),
        vector_db_loaded: loaded,
        message: None,
    }
}

fn scenario_answer() -> AnswerResult {
    AnswerResult {
        answer: "X is Y".to_string(),
        retrieved_documents: vec![DocumentRecord {
            page: PageRef::from(3),
            link: "doc1#p3".to_string(),
            snippet: "...".to_string(),
        }],
    }
}

#[tokio::test]
async fn test_scenario_healthy_and_loaded_is_ready() {
    let (backend, mut client) = setup();
    backend.push_health(Ok(health("healthy", true)));

    let status = client.check_backend_status().await;

    assert_eq!(status, BackendStatus::Ready);
    assert_eq!(status.indicator(), Indicator::Online);
    assert_eq!(status.label(), "System Ready");
    assert_eq!(client.view().page.status, Some(BackendStatus::Ready));
}

#[tokio::test]
async fn test_scenario_healthy_but_not_loaded_is_not_ready() {
    let (backend, mut client) = setup();
    backend.push_health(Ok(health("healthy", false)));

    let status = client.check_backend_status().await;

    assert_eq!(status, BackendStatus::NotReady);
    assert_eq!(status.indicator(), Indicator::Offline);
    assert_eq!(status.label(), "System Not Ready");
}

#[tokio::test]
async fn test_scenario_network_error_is_offline() {
    let (backend, mut client) = setup();
    backend.push_health(Err(BackendError::Transport("connection refused".into())));

    let status = client.check_backend_status().await;

    assert_eq!(status.label(), "Backend Offline");
    assert_eq!(status.indicator(), Indicator::Offline);
    // Health failures never reach the error region
    assert!(!client.view().page.error.visible);
    assert_eq!(
        client.view().events,
        vec![ViewEvent::Status(BackendStatus::Offline)]
    );
}

#[tokio::test]
async fn test_scenario_answer_rendered() {
    let (backend, mut client) = setup();
    backend.push_ask(Ok(scenario_answer()));

    let outcome = client.ask_question("What is X?").await;

    assert_eq!(outcome, AskOutcome::Answered { documents: 1 });
    let page = &client.view().page;
    assert_eq!(page.ui_state(), UiState::ResultsShown);
    assert_eq!(page.results.answer, "X is Y");
    assert_eq!(page.results.documents.len(), 1);
    let card = &page.results.documents[0];
    assert_eq!(card.page_label(), "Page 3");
    assert_eq!(card.link, "doc1#p3");
    assert_eq!(card.snippet, "...");
}

#[tokio::test]
async fn test_scenario_backend_error_message_shown() {
    let (backend, mut client) = setup();
    backend.push_ask(Err(BackendError::Application {
        status: 400,
        message: Some("Question too long".to_string()),
    }));

    client.ask_question("What is X?").await;

    let page = &client.view().page;
    assert_eq!(page.ui_state(), UiState::ErrorShown);
    assert_eq!(page.error.message, "Question too long");
    assert!(!page.results.visible);
}

#[tokio::test]
async fn test_scenario_network_exception_shows_fixed_message() {
    let (backend, mut client) = setup();
    backend.push_ask(Err(BackendError::Transport("dns error".into())));

    let outcome = client.ask_question("What is X?").await;

    assert_eq!(
        outcome,
        AskOutcome::Failed {
            message: CONNECTION_ERROR_MESSAGE.to_string()
        }
    );
    assert_eq!(client.view().page.error.message, CONNECTION_ERROR_MESSAGE);
}

#[tokio::test]
async fn test_loading_spans_request_for_every_outcome() {
    let replies = vec![
        Ok(scenario_answer()),
        Err(BackendError::Application {
            status: 503,
            message: None,
        }),
        Err(BackendError::Transport("refused".into())),
        Err(BackendError::InvalidBody("eof".into())),
    ];

    for reply in replies {
        let (backend, mut client) = setup();
        backend.push_ask(reply);

        client.ask_question("q").await;

        // Enabled before the request, disabled during, enabled after
        assert_eq!(client.view().loading_events(), vec![(true, 0), (false, 1)]);
        assert!(client.view().page.submit.enabled);
        assert!(!client.view().page.submit.loader_visible);
    }
}

#[tokio::test]
async fn test_regions_hidden_before_request() {
    let (backend, mut client) = setup();
    backend.push_ask(Ok(scenario_answer()));

    client.ask_question("q").await;

    let events = &client.view().events;
    assert_eq!(
        &events[..3],
        &[
            ViewEvent::Loading {
                on: true,
                asks_so_far: 0
            },
            ViewEvent::HideResults,
            ViewEvent::HideError,
        ]
    );
}

#[tokio::test]
async fn test_validation_skips_loading_and_network() {
    let (backend, mut client) = setup();

    for input in ["", "   ", "\n\t"] {
        client.ask_question(input).await;
    }

    assert!(backend.calls().is_empty());
    assert!(client.view().loading_events().is_empty());
    assert_eq!(client.view().page.error.message, "Please enter a question");
}

#[tokio::test]
async fn test_one_post_per_submission_with_trimmed_text() {
    let (backend, mut client) = setup();
    let inputs = ["  a  ", "b\n", "\tc d\t"];
    for _ in inputs {
        backend.push_ask(Ok(scenario_answer()));
    }

    for input in inputs {
        client.ask_question(input).await;
    }

    assert_eq!(
        backend.calls(),
        vec![
            BackendCall::Ask("a".to_string()),
            BackendCall::Ask("b".to_string()),
            BackendCall::Ask("c d".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_document_order_and_count_preserved() {
    let (backend, mut client) = setup();
    let documents: Vec<DocumentRecord> = (0..7i64)
        .rev()
        .map(|i| DocumentRecord {
            page: PageRef::from(i),
            link: format!("book.pdf#{}", i),
            snippet: format!("snippet {}", i),
        })
        .collect();
    backend.push_ask(Ok(AnswerResult {
        answer: "a".to_string(),
        retrieved_documents: documents.clone(),
    }));

    client.ask_question("q").await;

    let cards = &client.view().page.results.documents;
    assert_eq!(cards.len(), documents.len());
    for (i, (card, doc)) in cards.iter().zip(&documents).enumerate() {
        assert_eq!(card.index, i + 1);
        assert_eq!(card.link, doc.link);
        assert_eq!(card.page, doc.page.to_string());
    }
}

#[tokio::test]
async fn test_hides_are_idempotent() {
    let (_backend, mut client) = setup();
    let before = client.view().page.clone();

    client.hide_error();
    client.hide_results();
    client.hide_error();
    client.hide_results();

    assert_eq!(client.view().page, before);
}

#[tokio::test]
async fn test_render_results_replaces_cards() {
    let (_backend, mut client) = setup();
    let mut result = scenario_answer();
    result.retrieved_documents = vec![scenario_answer().retrieved_documents[0].clone(); 4];
    client.render_results(&result);
    assert_eq!(client.view().page.results.documents.len(), 4);

    client.render_results(&scenario_answer());
    assert_eq!(client.view().page.results.documents.len(), 1);
    assert!(client
        .view()
        .events
        .iter()
        .filter(|e| **e == ViewEvent::ClearDocuments)
        .count()
        == 2);
}
