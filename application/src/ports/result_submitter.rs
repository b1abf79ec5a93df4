//! Result submission port
//!
//! Stands in for the backend call that records a submitted quiz. The LMS
//! front end only acknowledged submissions locally, so adapters here either
//! log the result or append it to a local file.

use async_trait::async_trait;
use quiz_domain::{ScoreResult, SessionRef};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SubmitResultError {
    #[error("Result store unavailable: {0}")]
    Unavailable(String),

    #[error("Failed to write result: {0}")]
    Io(String),
}

/// Port for recording a submitted quiz result.
///
/// Failures never change the score; callers log them and carry on.
#[async_trait]
pub trait QuizResultSubmitter: Send + Sync {
    async fn submit_quiz_result(
        &self,
        session_ref: &SessionRef,
        result: &ScoreResult,
    ) -> Result<(), SubmitResultError>;
}

/// No-op submitter for tests and when recording is disabled.
pub struct NoResultSubmitter;

#[async_trait]
impl QuizResultSubmitter for NoResultSubmitter {
    async fn submit_quiz_result(
        &self,
        _session_ref: &SessionRef,
        _result: &ScoreResult,
    ) -> Result<(), SubmitResultError> {
        Ok(())
    }
}
