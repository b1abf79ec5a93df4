//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// Most variants are configuration errors raised while building a
/// [`QuizDefinition`](crate::QuizDefinition). The rest are raised by a
/// [`QuizSession`](crate::QuizSession) when it is driven into a state it
/// cannot accept.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Question set is empty")]
    EmptyQuestionSet,

    #[error("Duplicate question id: {0}")]
    DuplicateQuestionId(String),

    #[error("Question id cannot be empty")]
    EmptyQuestionId,

    #[error("Question {question_id}: prompt cannot be empty")]
    EmptyPrompt { question_id: String },

    #[error("Question {question_id}: {kind} question is missing {field}")]
    MissingCorrectness {
        question_id: String,
        kind: String,
        field: &'static str,
    },

    #[error("Question {question_id}: {kind} question must not set {field}")]
    UnexpectedField {
        question_id: String,
        kind: String,
        field: &'static str,
    },

    #[error("Question {question_id}: {kind} question has no options")]
    MissingOptions { question_id: String, kind: String },

    #[error("Question {question_id}: duplicate option id {option_id}")]
    DuplicateOptionId {
        question_id: String,
        option_id: String,
    },

    #[error("Question {question_id}: correct option {option_id} is not one of its options")]
    UnknownCorrectOption {
        question_id: String,
        option_id: String,
    },

    #[error("Question {question_id}: option {option_id} has no image")]
    MissingImage {
        question_id: String,
        option_id: String,
    },

    #[error("Passing threshold must be between 0 and 100, got {0}")]
    InvalidThreshold(u32),

    #[error("Time limit cannot be zero")]
    ZeroTimeLimit,

    #[error("Unknown question: {0}")]
    UnknownQuestion(String),

    #[error("Question {question_id} expects {expected}, got {actual}")]
    AnswerKindMismatch {
        question_id: String,
        expected: &'static str,
        actual: &'static str,
    },

    #[error("Question {question_id} has no option {option_id}")]
    UnknownOption {
        question_id: String,
        option_id: String,
    },

    #[error("Question index {index} out of range (0..{total})")]
    IndexOutOfRange { index: usize, total: usize },

    #[error("Session already submitted")]
    SessionClosed,
}

impl DomainError {
    /// Whether this error comes from an invalid quiz definition
    /// (as opposed to a misuse of a running session).
    pub fn is_configuration_error(&self) -> bool {
        !matches!(
            self,
            DomainError::UnknownQuestion(_)
                | DomainError::AnswerKindMismatch { .. }
                | DomainError::UnknownOption { .. }
                | DomainError::IndexOutOfRange { .. }
                | DomainError::SessionClosed
        )
    }
}
