//! Shared helpers for use cases.

use crate::ports::result_submitter::QuizResultSubmitter;
use quiz_domain::QuizOutcome;
use tracing::{info, warn};

/// Send a submitted outcome to the result submitter.
///
/// Returns whether the result was recorded. Failures are logged and never
/// affect the outcome itself.
pub(crate) async fn record_result<R: QuizResultSubmitter + ?Sized>(
    submitter: &R,
    outcome: &QuizOutcome,
    enabled: bool,
) -> bool {
    if !enabled {
        return false;
    }

    match submitter
        .submit_quiz_result(&outcome.session_ref, &outcome.score)
        .await
    {
        Ok(()) => {
            info!(
                "Recorded result for {} (attempt {}): {}",
                outcome.session_ref,
                outcome.attempt,
                outcome.score.summary()
            );
            true
        }
        Err(e) => {
            warn!("Could not record result for {}: {}", outcome.session_ref, e);
            false
        }
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::ports::question_source::{LoadQuizError, QuestionSetSource};
    use crate::ports::result_submitter::{QuizResultSubmitter, SubmitResultError};
    use async_trait::async_trait;
    use quiz_domain::{
        PassingThreshold, Question, QuestionOption, QuizDefinition, ScoreResult, SessionRef,
    };
    use std::sync::Mutex;

    pub fn session_ref() -> SessionRef {
        SessionRef::new("web-dev-101", "html-basics")
    }

    /// q1: multiple choice (correct "b"), q2: true/false (true), q3: true/false (false)
    pub fn definition() -> QuizDefinition {
        QuizDefinition::new(
            session_ref(),
            "HTML Basics",
            vec![
                Question::multiple_choice(
                    "q1",
                    "Which tag defines a paragraph?",
                    vec![QuestionOption::new("a", "<div>"), QuestionOption::new("b", "<p>")],
                    "b",
                    "<p> defines a paragraph.",
                )
                .unwrap(),
                Question::true_false("q2", "HTML is a markup language.", true, "").unwrap(),
                Question::true_false("q3", "<br> needs a closing tag.", false, "").unwrap(),
            ],
            PassingThreshold::new(70).unwrap(),
        )
        .unwrap()
    }

    pub struct StaticSource(pub QuizDefinition);

    #[async_trait]
    impl QuestionSetSource for StaticSource {
        async fn load_quiz(
            &self,
            session_ref: &SessionRef,
        ) -> Result<QuizDefinition, LoadQuizError> {
            if session_ref == self.0.session_ref() {
                Ok(self.0.clone())
            } else {
                Err(LoadQuizError::NotFound(session_ref.clone()))
            }
        }

        async fn list_quizzes(&self) -> Result<Vec<SessionRef>, LoadQuizError> {
            Ok(vec![self.0.session_ref().clone()])
        }
    }

    #[derive(Default)]
    pub struct RecordingSubmitter {
        pub fail: bool,
        pub results: Mutex<Vec<(SessionRef, ScoreResult)>>,
    }

    impl RecordingSubmitter {
        pub fn failing() -> Self {
            Self {
                fail: true,
                ..Default::default()
            }
        }

        pub fn count(&self) -> usize {
            self.results.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl QuizResultSubmitter for RecordingSubmitter {
        async fn submit_quiz_result(
            &self,
            session_ref: &SessionRef,
            result: &ScoreResult,
        ) -> Result<(), SubmitResultError> {
            if self.fail {
                return Err(SubmitResultError::Unavailable("offline".to_string()));
            }
            self.results
                .lock()
                .unwrap()
                .push((session_ref.clone(), result.clone()));
            Ok(())
        }
    }
}
