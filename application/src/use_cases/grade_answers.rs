//! Grade Answers use case
//!
//! Scores a complete answer sheet without an interactive session. The sheet
//! is replayed into a fresh [`QuizSession`] so answers are checked against
//! each question's kind exactly as they would be interactively.

use crate::ports::question_source::{LoadQuizError, QuestionSetSource};
use crate::ports::result_submitter::QuizResultSubmitter;
use crate::use_cases::shared::record_result;
use quiz_domain::{AnswerMap, DomainError, QuizOutcome, QuizSession, SessionRef};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum GradeAnswersError {
    #[error(transparent)]
    Load(#[from] LoadQuizError),

    #[error("Invalid answer sheet: {0}")]
    InvalidAnswer(#[from] DomainError),
}

impl GradeAnswersError {
    /// Whether the quiz content is at fault rather than the answer sheet
    pub fn is_configuration_error(&self) -> bool {
        match self {
            GradeAnswersError::Load(e) => e.is_configuration_error(),
            GradeAnswersError::InvalidAnswer(_) => false,
        }
    }
}

/// Input for the GradeAnswers use case
#[derive(Debug, Clone)]
pub struct GradeAnswersInput {
    pub session_ref: SessionRef,
    pub answers: AnswerMap,
    pub record_result: bool,
}

impl GradeAnswersInput {
    pub fn new(session_ref: SessionRef, answers: AnswerMap) -> Self {
        Self {
            session_ref,
            answers,
            record_result: true,
        }
    }

    pub fn without_recording(mut self) -> Self {
        self.record_result = false;
        self
    }
}

#[derive(Debug, Clone)]
pub struct GradeAnswersOutput {
    pub outcome: QuizOutcome,
    pub result_recorded: bool,
}

pub struct GradeAnswersUseCase<S, R>
where
    S: QuestionSetSource + ?Sized + 'static,
    R: QuizResultSubmitter + ?Sized + 'static,
{
    source: Arc<S>,
    submitter: Arc<R>,
}

impl<S, R> GradeAnswersUseCase<S, R>
where
    S: QuestionSetSource + ?Sized + 'static,
    R: QuizResultSubmitter + ?Sized + 'static,
{
    pub fn new(source: Arc<S>, submitter: Arc<R>) -> Self {
        Self { source, submitter }
    }

    pub async fn execute(
        &self,
        input: GradeAnswersInput,
    ) -> Result<GradeAnswersOutput, GradeAnswersError> {
        let definition = self.source.load_quiz(&input.session_ref).await?;
        let mut session = QuizSession::new(definition);

        for (question_id, value) in input.answers.iter() {
            session.select_answer(question_id, value.clone())?;
        }
        debug!(
            "Replayed {} answers into {}",
            input.answers.len(),
            input.session_ref
        );

        let outcome = session.submit()?.clone();
        info!("Graded {}: {}", outcome.session_ref, outcome.score.summary());

        let result_recorded =
            record_result(self.submitter.as_ref(), &outcome, input.record_result).await;

        Ok(GradeAnswersOutput {
            outcome,
            result_recorded,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::shared::fixtures::{
        RecordingSubmitter, StaticSource, definition, session_ref,
    };
    use quiz_domain::AnswerValue;

    fn use_case(
        submitter: Arc<RecordingSubmitter>,
    ) -> GradeAnswersUseCase<StaticSource, RecordingSubmitter> {
        GradeAnswersUseCase::new(Arc::new(StaticSource(definition())), submitter)
    }

    #[tokio::test]
    async fn test_grade_partial_sheet() {
        let submitter = Arc::new(RecordingSubmitter::default());
        let mut answers = AnswerMap::new();
        answers.select("q1", AnswerValue::option("b"));
        answers.select("q3", AnswerValue::Boolean(true));

        let output = use_case(submitter.clone())
            .execute(GradeAnswersInput::new(session_ref(), answers))
            .await
            .unwrap();

        assert_eq!(output.outcome.score.correct_count, 1);
        assert_eq!(output.outcome.score.score_percent, 33);
        assert!(!output.outcome.passed());
        assert!(output.outcome.feedback[1].is_unanswered());
        assert!(output.result_recorded);
        assert_eq!(submitter.count(), 1);
    }

    #[tokio::test]
    async fn test_grade_rejects_mismatched_answer() {
        let mut answers = AnswerMap::new();
        answers.select("q2", AnswerValue::option("true"));

        let err = use_case(Arc::new(RecordingSubmitter::default()))
            .execute(GradeAnswersInput::new(session_ref(), answers))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            GradeAnswersError::InvalidAnswer(DomainError::AnswerKindMismatch { .. })
        ));
        assert!(!err.is_configuration_error());
    }

    #[tokio::test]
    async fn test_grade_rejects_unknown_question() {
        let mut answers = AnswerMap::new();
        answers.select("q42", AnswerValue::Boolean(true));

        let err = use_case(Arc::new(RecordingSubmitter::default()))
            .execute(GradeAnswersInput::new(session_ref(), answers))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            GradeAnswersError::InvalidAnswer(DomainError::UnknownQuestion(_))
        ));
    }

    #[tokio::test]
    async fn test_grade_unparsable_quiz_is_configuration_error() {
        let err = GradeAnswersError::Load(LoadQuizError::Parse {
            path: "quizzes/web-dev-101/html-basics.toml".to_string(),
            message: "expected a table".to_string(),
        });
        assert!(err.is_configuration_error());

        let err = GradeAnswersError::Load(LoadQuizError::NotFound(session_ref()));
        assert!(!err.is_configuration_error());
    }

    #[tokio::test]
    async fn test_grade_without_recording() {
        let submitter = Arc::new(RecordingSubmitter::default());
        let output = use_case(submitter.clone())
            .execute(GradeAnswersInput::new(session_ref(), AnswerMap::new()).without_recording())
            .await
            .unwrap();

        assert_eq!(output.outcome.score.score_percent, 0);
        assert!(!output.result_recorded);
        assert_eq!(submitter.count(), 0);
    }
}
