//! Built-in sample course
//!
//! Ships the `web-dev-101` course so the binary works without any content
//! directory. The quiz files are the same TOML format the directory source
//! reads.

use super::document::QuizDocument;
use async_trait::async_trait;
use quiz_application::{LoadQuizError, QuestionSetSource};
use quiz_domain::{PassingThreshold, QuizDefinition, SessionRef};

const SAMPLE_COURSE: &str = "web-dev-101";

const SAMPLE_QUIZZES: [(&str, &str); 2] = [
    (
        "html-basics",
        include_str!("../../samples/web-dev-101/html-basics.toml"),
    ),
    (
        "semantic-html",
        include_str!("../../samples/web-dev-101/semantic-html.toml"),
    ),
];

/// In-memory source serving the bundled sample quizzes.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleCatalog;

impl SampleCatalog {
    pub fn new() -> Self {
        Self
    }

    /// The quiz shown when no quiz is named explicitly.
    pub fn default_quiz() -> SessionRef {
        SessionRef::new(SAMPLE_COURSE, SAMPLE_QUIZZES[0].0)
    }

    fn find(session_ref: &SessionRef) -> Option<&'static str> {
        if session_ref.course_id != SAMPLE_COURSE {
            return None;
        }
        SAMPLE_QUIZZES
            .iter()
            .find(|(id, _)| *id == session_ref.quiz_id)
            .map(|(_, text)| *text)
    }
}

#[async_trait]
impl QuestionSetSource for SampleCatalog {
    async fn load_quiz(&self, session_ref: &SessionRef) -> Result<QuizDefinition, LoadQuizError> {
        let text =
            Self::find(session_ref).ok_or_else(|| LoadQuizError::NotFound(session_ref.clone()))?;

        let document = QuizDocument::from_toml(text).map_err(|e| LoadQuizError::Parse {
            path: format!("<sample:{}>", session_ref),
            message: e.message().to_string(),
        })?;

        document
            .into_definition(session_ref.clone(), PassingThreshold::default())
            .map_err(|source| LoadQuizError::Invalid {
                session_ref: session_ref.clone(),
                source,
            })
    }

    async fn list_quizzes(&self) -> Result<Vec<SessionRef>, LoadQuizError> {
        Ok(SAMPLE_QUIZZES
            .iter()
            .map(|(id, _)| SessionRef::new(SAMPLE_COURSE, *id))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_domain::{AnswerMap, QuestionKind, score};
    use std::time::Duration;

    #[tokio::test]
    async fn test_every_sample_loads() {
        let catalog = SampleCatalog::new();
        let quizzes = catalog.list_quizzes().await.unwrap();
        assert_eq!(quizzes.len(), 2);

        for session_ref in &quizzes {
            let def = catalog.load_quiz(session_ref).await.unwrap();
            assert!(def.total_questions() > 0, "{} is empty", session_ref);
        }
    }

    #[tokio::test]
    async fn test_html_basics_shape() {
        let def = SampleCatalog::new()
            .load_quiz(&SampleCatalog::default_quiz())
            .await
            .unwrap();

        assert_eq!(def.title(), "HTML Basics");
        assert_eq!(def.total_questions(), 10);
        assert_eq!(def.passing_threshold().percent(), 70);
        assert_eq!(def.time_limit(), Some(Duration::from_secs(600)));

        let questions = def.questions();
        assert_eq!(questions.count_by_kind(QuestionKind::MultipleChoice), 4);
        assert_eq!(questions.count_by_kind(QuestionKind::TrueFalse), 4);
        assert_eq!(questions.count_by_kind(QuestionKind::ImageChoice), 2);
    }

    #[tokio::test]
    async fn test_correct_answers_score_full_marks() {
        let def = SampleCatalog::new()
            .load_quiz(&SampleCatalog::default_quiz())
            .await
            .unwrap();

        let answers: AnswerMap = def
            .questions()
            .iter()
            .map(|q| (q.id().to_string(), q.correct_value()))
            .collect();
        let result = score(def.questions().as_slice(), &answers, def.passing_threshold()).unwrap();
        assert_eq!(result.score_percent, 100);
        assert!(result.passed);
    }

    #[tokio::test]
    async fn test_unknown_quiz() {
        let catalog = SampleCatalog::new();
        let err = catalog
            .load_quiz(&SessionRef::new("web-dev-101", "css"))
            .await
            .unwrap_err();
        assert!(matches!(err, LoadQuizError::NotFound(_)));

        let err = catalog
            .load_quiz(&SessionRef::new("other", "html-basics"))
            .await
            .unwrap_err();
        assert!(matches!(err, LoadQuizError::NotFound(_)));
    }
}
