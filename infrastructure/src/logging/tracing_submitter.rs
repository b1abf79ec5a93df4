//! Submitter that only acknowledges results in the diagnostic log.

use async_trait::async_trait;
use quiz_application::{QuizResultSubmitter, SubmitResultError};
use quiz_domain::{ScoreResult, SessionRef};
use tracing::info;

/// Acknowledges each submission with an `info!` event and never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingResultSubmitter;

#[async_trait]
impl QuizResultSubmitter for TracingResultSubmitter {
    async fn submit_quiz_result(
        &self,
        session_ref: &SessionRef,
        result: &ScoreResult,
    ) -> Result<(), SubmitResultError> {
        info!(
            course_id = %session_ref.course_id,
            quiz_id = %session_ref.quiz_id,
            score = result.score_percent,
            passed = result.passed,
            "Quiz result submitted: {}",
            result.summary()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_domain::PassingThreshold;

    #[tokio::test]
    async fn test_always_acknowledges() {
        let result = ScoreResult::from_counts(3, 4, PassingThreshold::default()).unwrap();
        let outcome = TracingResultSubmitter
            .submit_quiz_result(&SessionRef::new("c", "q"), &result)
            .await;
        assert!(outcome.is_ok());
    }
}
