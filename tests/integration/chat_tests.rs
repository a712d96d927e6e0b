use askdocs::api::{AnswerResult, HealthStatus};
use askdocs::backend::{BackendCall, MockBackend};
use askdocs::client::{BackendStatus, QueryClient};
use askdocs::commands::chat::{run_session, SessionSummary};

use crate::helpers::recording_view::RecordingView;

fn answer() -> AnswerResult {
    AnswerResult {
        answer: "ok".to_string(),
        retrieved_documents: Vec::new(),
    }
}

async fn session(backend: &MockBackend, input: &str) -> (SessionSummary, RecordingView, String) {
    session_with(backend, input, &[]).await
}

async fn session_with(
    backend: &MockBackend,
    input: &str,
    examples: &[String],
) -> (SessionSummary, RecordingView, String) {
    let view = RecordingView::new(backend);
    let mut client = QueryClient::new(backend.clone(), view);
    let mut prompts = Vec::new();

    let summary = run_session(&mut client, input.as_bytes(), &mut prompts, examples)
        .await
        .unwrap();

    let (_, view) = client.into_parts();
    (summary, view, String::from_utf8(prompts).unwrap())
}

#[tokio::test]
async fn test_status_checked_on_start() {
    let backend = MockBackend::new();
    backend.push_health(Ok(HealthStatus {
        status: "healthy".to_string(),
        vector_db_loaded: true,
        message: None,
    }));

    let (summary, view, _) = session(&backend, "").await;

    assert_eq!(summary, SessionSummary::default());
    assert_eq!(view.page.status, Some(BackendStatus::Ready));
    assert_eq!(backend.calls(), vec![BackendCall::Health]);
}

#[tokio::test]
async fn test_each_line_submits() {
    let backend = MockBackend::new();
    backend.push_ask(Ok(answer()));
    backend.push_ask(Ok(answer()));

    let (summary, _, _) = session(&backend, "first\nsecond\n").await;

    assert_eq!(
        summary,
        SessionSummary {
            submitted: 2,
            answered: 2
        }
    );
    assert_eq!(backend.ask_count(), 2);
}

#[tokio::test]
async fn test_continuation_joins_lines() {
    let backend = MockBackend::new();
    backend.push_ask(Ok(answer()));

    let (_, _, prompts) = session(&backend, "line one\\\nline two\n").await;

    assert_eq!(
        backend.calls()[1],
        BackendCall::Ask("line one\nline two".to_string())
    );
    assert!(prompts.contains("… "));
}

#[tokio::test]
async fn test_blank_line_shows_validation_error() {
    let backend = MockBackend::new();

    let (summary, view, _) = session(&backend, "   \n").await;

    assert_eq!(summary.submitted, 1);
    assert_eq!(summary.answered, 0);
    assert_eq!(backend.ask_count(), 0);
    assert_eq!(view.page.error.message, "Please enter a question");
}

#[tokio::test]
async fn test_quit_and_status_commands() {
    let backend = MockBackend::new();

    let (summary, _, _) = session(&backend, ":status\n:quit\nnever asked\n").await;

    assert_eq!(summary.submitted, 0);
    assert_eq!(backend.calls(), vec![BackendCall::Health, BackendCall::Health]);
}

#[tokio::test]
async fn test_dangling_continuation_submitted_at_eof() {
    let backend = MockBackend::new();
    backend.push_ask(Ok(answer()));

    let (summary, _, _) = session(&backend, "unfinished\\\n").await;

    assert_eq!(summary.answered, 1);
    assert_eq!(
        backend.calls()[1],
        BackendCall::Ask("unfinished".to_string())
    );
}

#[tokio::test]
async fn test_examples_listed_and_asked() {
    let backend = MockBackend::new();
    backend.push_ask(Ok(answer()));
    let examples = vec![
        "What is Newton's first law of motion?".to_string(),
        "Explain the concept of kinetic energy.".to_string(),
    ];

    let (summary, _, prompts) =
        session_with(&backend, ":examples\n:example 2\n:example 9\n", &examples).await;

    assert!(prompts.contains("  1. What is Newton's first law of motion?"));
    assert!(prompts.contains("  2. Explain the concept of kinetic energy."));
    assert!(prompts.contains("No example 9"));
    assert_eq!(summary.answered, 1);
    assert_eq!(
        backend.calls()[1],
        BackendCall::Ask("Explain the concept of kinetic energy.".to_string())
    );
}
