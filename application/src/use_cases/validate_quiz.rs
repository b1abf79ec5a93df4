//! Validate Quiz use case
//!
//! Loads quiz definitions to surface configuration errors before anyone
//! starts a session, and summarizes the ones that are valid.

use crate::ports::question_source::{LoadQuizError, QuestionSetSource};
use quiz_domain::{QuestionKind, QuizDefinition, SessionRef};
use std::sync::Arc;
use std::time::Duration;
use tracing::warn;

/// Summary of a valid quiz definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSummary {
    pub session_ref: SessionRef,
    pub title: String,
    pub total_questions: usize,
    /// Question count per kind, in [`QuestionKind::all`] order
    pub kind_counts: Vec<(QuestionKind, usize)>,
    pub passing_threshold: u8,
    pub time_limit: Option<Duration>,
}

impl From<&QuizDefinition> for QuizSummary {
    fn from(definition: &QuizDefinition) -> Self {
        let questions = definition.questions();
        Self {
            session_ref: definition.session_ref().clone(),
            title: definition.title().to_string(),
            total_questions: questions.len(),
            kind_counts: QuestionKind::all()
                .into_iter()
                .map(|kind| (kind, questions.count_by_kind(kind)))
                .collect(),
            passing_threshold: definition.passing_threshold().percent(),
            time_limit: definition.time_limit(),
        }
    }
}

pub struct ValidateQuizUseCase<S: QuestionSetSource + ?Sized + 'static> {
    source: Arc<S>,
}

impl<S: QuestionSetSource + ?Sized + 'static> ValidateQuizUseCase<S> {
    pub fn new(source: Arc<S>) -> Self {
        Self { source }
    }

    /// Validate a single quiz.
    pub async fn execute(&self, session_ref: &SessionRef) -> Result<QuizSummary, LoadQuizError> {
        let definition = self.source.load_quiz(session_ref).await?;
        Ok(QuizSummary::from(&definition))
    }

    /// Validate every quiz the source lists.
    pub async fn execute_all(
        &self,
    ) -> Result<Vec<(SessionRef, Result<QuizSummary, LoadQuizError>)>, LoadQuizError> {
        let mut results = Vec::new();
        for session_ref in self.source.list_quizzes().await? {
            let result = self.execute(&session_ref).await;
            if let Err(e) = &result {
                warn!("Quiz {} is invalid: {}", session_ref, e);
            }
            results.push((session_ref, result));
        }
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::shared::fixtures::{StaticSource, definition, session_ref};

    #[tokio::test]
    async fn test_summary_counts_kinds() {
        let use_case = ValidateQuizUseCase::new(Arc::new(StaticSource(definition())));
        let summary = use_case.execute(&session_ref()).await.unwrap();

        assert_eq!(summary.title, "HTML Basics");
        assert_eq!(summary.total_questions, 3);
        assert_eq!(
            summary.kind_counts,
            vec![
                (QuestionKind::MultipleChoice, 1),
                (QuestionKind::TrueFalse, 2),
                (QuestionKind::ImageChoice, 0),
            ]
        );
        assert_eq!(summary.passing_threshold, 70);
        assert!(summary.time_limit.is_none());
    }

    #[tokio::test]
    async fn test_execute_all() {
        let use_case = ValidateQuizUseCase::new(Arc::new(StaticSource(definition())));
        let results = use_case.execute_all().await.unwrap();
        assert_eq!(results.len(), 1);
        assert!(results[0].1.is_ok());
    }
}
