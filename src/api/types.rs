use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Body of `GET /health`.
///
/// Fields default when absent: the relay answers `{status, message}` with no
/// `vector_db_loaded` when the backend is unreachable, and that must read as
/// "not ready" rather than fail to parse.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    #[serde(default)]
    pub status: String,

    #[serde(default)]
    pub vector_db_loaded: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl HealthStatus {
    /// Backend is up and its vector store is loaded.
    pub fn is_ready(&self) -> bool {
        self.status == "healthy" && self.vector_db_loaded
    }
}

/// Rejection reason for user input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuestionError {
    #[error("Please enter a question")]
    Empty,
}

/// A trimmed, non-empty question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question(String);

impl Question {
    /// Trim `input` and reject it if nothing is left.
    pub fn parse(input: &str) -> Result<Self, QuestionError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(QuestionError::Empty);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Body of `POST /ask`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskRequest {
    pub question: String,
}

impl From<&Question> for AskRequest {
    fn from(question: &Question) -> Self {
        Self {
            question: question.as_str().to_string(),
        }
    }
}

/// Page reference of a retrieved document.
///
/// Backends disagree on whether this is a number or a string, so both are
/// accepted. Numbers keep their JSON form, integral or not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PageRef {
    Number(serde_json::Number),
    Label(String),
}

impl fmt::Display for PageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageRef::Number(n) => {
                if let Some(i) = n.as_i64() {
                    write!(f, "{}", i)
                } else if let Some(u) = n.as_u64() {
                    write!(f, "{}", u)
                } else {
                    // 3.0 prints as "3", 3.5 as "3.5"
                    write!(f, "{}", n.as_f64().unwrap_or(f64::NAN))
                }
            }
            PageRef::Label(s) => f.write_str(s),
        }
    }
}

impl From<i64> for PageRef {
    fn from(n: i64) -> Self {
        PageRef::Number(n.into())
    }
}

/// One retrieved supporting snippet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRecord {
    pub page: PageRef,
    pub link: String,
    pub snippet: String,
}

/// Successful body of `POST /ask`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerResult {
    pub answer: String,
    pub retrieved_documents: Vec<DocumentRecord>,
}

/// Error body of a failed `POST /ask`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<serde_json::Value>,
}
