use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use super::{BackendError, QaBackend};
use crate::api::{AnswerResult, HealthStatus, Question};

/// A call observed by [`MockBackend`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendCall {
    Health,
    Ask(String),
}

/// Scripted backend for testing.
///
/// Replies are consumed in the order they were queued. An exhausted queue
/// answers with a transport error, which is what an absent server looks like.
#[derive(Clone, Default)]
pub struct MockBackend {
    health_replies: Arc<Mutex<VecDeque<Result<HealthStatus, BackendError>>>>,
    ask_replies: Arc<Mutex<VecDeque<Result<AnswerResult, BackendError>>>>,
    calls: Arc<Mutex<Vec<BackendCall>>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_health(&self, reply: Result<HealthStatus, BackendError>) -> &Self {
        self.health_replies.lock().unwrap().push_back(reply);
        self
    }

    pub fn push_ask(&self, reply: Result<AnswerResult, BackendError>) -> &Self {
        self.ask_replies.lock().unwrap().push_back(reply);
        self
    }

    /// Calls made so far, in order.
    pub fn calls(&self) -> Vec<BackendCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of `ask` calls made so far.
    pub fn ask_count(&self) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|c| matches!(c, BackendCall::Ask(_)))
            .count()
    }
}

#[async_trait]
impl QaBackend for MockBackend {
    async fn health(&self) -> Result<HealthStatus, BackendError> {
        self.calls.lock().unwrap().push(BackendCall::Health);
        self.health_replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(BackendError::Transport("connection refused".to_string())))
    }

    async fn ask(&self, question: &Question) -> Result<AnswerResult, BackendError> {
        self.calls
            .lock()
            .unwrap()
            .push(BackendCall::Ask(question.as_str().to_string()));
        self.ask_replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(BackendError::Transport("connection refused".to_string())))
    }

    fn backend_name(&self) -> &str {
        "mock"
    }
}
