//! Question source port
//!
//! Defines where quiz definitions come from. In the LMS this is a
//! content-management API; locally it is a directory of TOML files or the
//! built-in sample catalog.

use async_trait::async_trait;
use quiz_domain::{DomainError, QuizDefinition, SessionRef};
use thiserror::Error;

/// Errors that can occur while loading a quiz definition
#[derive(Error, Debug)]
pub enum LoadQuizError {
    #[error("Quiz not found: {0}")]
    NotFound(SessionRef),

    #[error("Invalid quiz {session_ref}: {source}")]
    Invalid {
        session_ref: SessionRef,
        #[source]
        source: DomainError,
    },

    #[error("Failed to read {path}: {message}")]
    Io { path: String, message: String },

    #[error("Failed to parse {path}: {message}")]
    Parse { path: String, message: String },
}

impl LoadQuizError {
    /// Whether the quiz exists but its content is malformed or inconsistent
    pub fn is_configuration_error(&self) -> bool {
        match self {
            LoadQuizError::Invalid { source, .. } => source.is_configuration_error(),
            LoadQuizError::Parse { .. } => true,
            LoadQuizError::NotFound(_) | LoadQuizError::Io { .. } => false,
        }
    }
}

/// Port for loading quiz definitions
#[async_trait]
pub trait QuestionSetSource: Send + Sync {
    /// Load and validate the quiz identified by `session_ref`.
    async fn load_quiz(&self, session_ref: &SessionRef) -> Result<QuizDefinition, LoadQuizError>;

    /// List the quizzes this source knows about, whether or not they are valid.
    async fn list_quizzes(&self) -> Result<Vec<SessionRef>, LoadQuizError>;
}
