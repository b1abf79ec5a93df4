//! Directory of TOML quiz files

use super::document::QuizDocument;
use async_trait::async_trait;
use quiz_application::{LoadQuizError, QuestionSetSource};
use quiz_domain::{PassingThreshold, QuizDefinition, SessionRef};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

const QUIZ_EXTENSION: &str = "toml";

/// Loads quizzes from `<root>/<course_id>/<quiz_id>.toml`.
pub struct TomlQuestionSetSource {
    root: PathBuf,
    default_threshold: PassingThreshold,
}

impl TomlQuestionSetSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            default_threshold: PassingThreshold::default(),
        }
    }

    pub fn with_default_threshold(mut self, threshold: PassingThreshold) -> Self {
        self.default_threshold = threshold;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the file backing `session_ref`, or `None` if either id could
    /// escape the content root.
    pub fn quiz_path(&self, session_ref: &SessionRef) -> Option<PathBuf> {
        if !is_safe_segment(&session_ref.course_id) || !is_safe_segment(&session_ref.quiz_id) {
            return None;
        }
        Some(
            self.root
                .join(&session_ref.course_id)
                .join(format!("{}.{}", session_ref.quiz_id, QUIZ_EXTENSION)),
        )
    }
}

fn is_safe_segment(segment: &str) -> bool {
    !segment.is_empty()
        && segment != "."
        && segment != ".."
        && !segment.contains(['/', '\\'])
}

fn io_error(path: &Path, e: std::io::Error) -> LoadQuizError {
    LoadQuizError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    }
}

#[async_trait]
impl QuestionSetSource for TomlQuestionSetSource {
    async fn load_quiz(&self, session_ref: &SessionRef) -> Result<QuizDefinition, LoadQuizError> {
        let path = self
            .quiz_path(session_ref)
            .ok_or_else(|| LoadQuizError::NotFound(session_ref.clone()))?;

        debug!("Loading quiz {} from {}", session_ref, path.display());

        let text = match tokio::fs::read_to_string(&path).await {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(LoadQuizError::NotFound(session_ref.clone()));
            }
            Err(e) => return Err(io_error(&path, e)),
        };

        let document = QuizDocument::from_toml(&text).map_err(|e| LoadQuizError::Parse {
            path: path.display().to_string(),
            message: e.message().to_string(),
        })?;

        document
            .into_definition(session_ref.clone(), self.default_threshold)
            .map_err(|source| LoadQuizError::Invalid {
                session_ref: session_ref.clone(),
                source,
            })
    }

    async fn list_quizzes(&self) -> Result<Vec<SessionRef>, LoadQuizError> {
        let mut quizzes = Vec::new();

        let mut courses = match tokio::fs::read_dir(&self.root).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(quizzes),
            Err(e) => return Err(io_error(&self.root, e)),
        };

        while let Some(course) = courses
            .next_entry()
            .await
            .map_err(|e| io_error(&self.root, e))?
        {
            let course_path = course.path();
            if !course_path.is_dir() {
                continue;
            }
            let Some(course_id) = course.file_name().to_str().map(str::to_string) else {
                continue;
            };

            let mut files = tokio::fs::read_dir(&course_path)
                .await
                .map_err(|e| io_error(&course_path, e))?;
            while let Some(file) = files
                .next_entry()
                .await
                .map_err(|e| io_error(&course_path, e))?
            {
                let file_path = file.path();
                if file_path.extension().and_then(|e| e.to_str()) != Some(QUIZ_EXTENSION) {
                    continue;
                }
                if let Some(quiz_id) = file_path.file_stem().and_then(|s| s.to_str()) {
                    quizzes.push(SessionRef::new(course_id.clone(), quiz_id));
                }
            }
        }

        quizzes.sort_by(|a, b| {
            (a.course_id.as_str(), a.quiz_id.as_str()).cmp(&(b.course_id.as_str(), b.quiz_id.as_str()))
        });
        Ok(quizzes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const VALID_QUIZ: &str = r#"
title = "CSS Selectors"
time_limit_seconds = 120

[[questions]]
id = "q1"
kind = "true_false"
prompt = "`#main` selects by id."
correct_answer = true
"#;

    fn write_quiz(root: &Path, course: &str, quiz: &str, body: &str) {
        let dir = root.join(course);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(format!("{quiz}.toml")), body).unwrap();
    }

    #[tokio::test]
    async fn test_load_quiz() {
        let dir = tempfile::tempdir().unwrap();
        write_quiz(dir.path(), "web-dev-101", "css", VALID_QUIZ);

        let source = TomlQuestionSetSource::new(dir.path())
            .with_default_threshold(PassingThreshold::new(50).unwrap());
        let def = source
            .load_quiz(&SessionRef::new("web-dev-101", "css"))
            .await
            .unwrap();

        assert_eq!(def.title(), "CSS Selectors");
        assert_eq!(def.passing_threshold().percent(), 50);
        assert_eq!(def.total_questions(), 1);
    }

    #[tokio::test]
    async fn test_missing_quiz_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let source = TomlQuestionSetSource::new(dir.path());

        let err = source
            .load_quiz(&SessionRef::new("web-dev-101", "nope"))
            .await
            .unwrap_err();
        assert!(matches!(err, LoadQuizError::NotFound(_)));
        assert!(!err.is_configuration_error());
    }

    #[tokio::test]
    async fn test_path_traversal_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let source = TomlQuestionSetSource::new(dir.path());

        let err = source
            .load_quiz(&SessionRef::new("..", "secrets"))
            .await
            .unwrap_err();
        assert!(matches!(err, LoadQuizError::NotFound(_)));
        assert!(source.quiz_path(&SessionRef::new("a", "b/c")).is_none());
    }

    #[tokio::test]
    async fn test_malformed_toml_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        write_quiz(dir.path(), "web-dev-101", "broken", "title = ");

        let source = TomlQuestionSetSource::new(dir.path());
        let err = source
            .load_quiz(&SessionRef::new("web-dev-101", "broken"))
            .await
            .unwrap_err();
        assert!(matches!(err, LoadQuizError::Parse { .. }));
        assert!(err.is_configuration_error());
    }

    #[tokio::test]
    async fn test_invalid_content_is_invalid_error() {
        let dir = tempfile::tempdir().unwrap();
        write_quiz(dir.path(), "web-dev-101", "empty", r#"title = "Empty""#);

        let source = TomlQuestionSetSource::new(dir.path());
        let err = source
            .load_quiz(&SessionRef::new("web-dev-101", "empty"))
            .await
            .unwrap_err();
        assert!(matches!(err, LoadQuizError::Invalid { .. }));
        assert!(err.is_configuration_error());
    }

    #[tokio::test]
    async fn test_list_quizzes_sorted() {
        let dir = tempfile::tempdir().unwrap();
        write_quiz(dir.path(), "web-dev-102", "js", VALID_QUIZ);
        write_quiz(dir.path(), "web-dev-101", "html", VALID_QUIZ);
        write_quiz(dir.path(), "web-dev-101", "css", VALID_QUIZ);
        fs::write(dir.path().join("web-dev-101").join("notes.md"), "skip").unwrap();
        fs::write(dir.path().join("README.md"), "skip").unwrap();

        let source = TomlQuestionSetSource::new(dir.path());
        let list = source.list_quizzes().await.unwrap();
        let names: Vec<String> = list.iter().map(|r| r.to_string()).collect();
        assert_eq!(
            names,
            vec!["web-dev-101/css", "web-dev-101/html", "web-dev-102/js"]
        );
    }

    #[tokio::test]
    async fn test_list_missing_root_is_empty() {
        let source = TomlQuestionSetSource::new("/definitely/not/a/real/lms-quiz/root");
        assert!(source.list_quizzes().await.unwrap().is_empty());
    }
}
