//! Wire types shared by the client and the relay.
//!
//! Every JSON shape exchanged with the question-answering backend is a
//! typed record here.

pub mod types;

pub use types::{
    AnswerResult, AskRequest, DocumentRecord, ErrorBody, HealthStatus, PageRef, Question,
    QuestionError,
};
