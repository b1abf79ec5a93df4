//! On-disk quiz document

use quiz_domain::{DomainError, PassingThreshold, QuestionRecord, QuizDefinition, SessionRef};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One quiz file: `<content_dir>/<course_id>/<quiz_id>.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizDocument {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passing_score: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_limit_seconds: Option<u64>,
    #[serde(default)]
    pub questions: Vec<QuestionRecord>,
}

impl QuizDocument {
    /// Parse a document from TOML text.
    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Validate the document and turn it into a [`QuizDefinition`].
    ///
    /// `default_threshold` applies when the file has no `passing_score`.
    pub fn into_definition(
        self,
        session_ref: SessionRef,
        default_threshold: PassingThreshold,
    ) -> Result<QuizDefinition, DomainError> {
        let threshold = match self.passing_score {
            Some(percent) => PassingThreshold::new(percent)?,
            None => default_threshold,
        };

        let definition =
            QuizDefinition::from_records(session_ref, self.title, self.questions, threshold)?;

        match self.time_limit_seconds {
            Some(seconds) => definition.with_time_limit(Duration::from_secs(seconds)),
            None => Ok(definition),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sref() -> SessionRef {
        SessionRef::new("web-dev-101", "html-basics")
    }

    #[test]
    fn test_parse_and_convert() {
        let doc = QuizDocument::from_toml(
            r#"
title = "HTML Basics"
passing_score = 60
time_limit_seconds = 300

[[questions]]
id = "q1"
kind = "multiple_choice"
prompt = "Which tag makes a link?"
correct_option_id = "a"
options = [{ id = "a", label = "<a>" }, { id = "b", label = "<link>" }]

[[questions]]
id = "q2"
kind = "true_false"
prompt = "HTML is a programming language."
correct_answer = false
explanation = "HTML is a markup language."
"#,
        )
        .unwrap();

        let def = doc.into_definition(sref(), PassingThreshold::default()).unwrap();
        assert_eq!(def.title(), "HTML Basics");
        assert_eq!(def.total_questions(), 2);
        assert_eq!(def.passing_threshold().percent(), 60);
        assert_eq!(def.time_limit(), Some(Duration::from_secs(300)));
    }

    #[test]
    fn test_default_threshold_used_when_missing() {
        let doc = QuizDocument::from_toml(
            r#"
title = "Short"

[[questions]]
id = "q1"
kind = "true_false"
prompt = "Yes?"
correct_answer = true
"#,
        )
        .unwrap();

        let def = doc
            .into_definition(sref(), PassingThreshold::new(85).unwrap())
            .unwrap();
        assert_eq!(def.passing_threshold().percent(), 85);
        assert_eq!(def.time_limit(), None);
    }

    #[test]
    fn test_empty_document_is_rejected() {
        let doc = QuizDocument::from_toml(r#"title = "Empty""#).unwrap();
        assert_eq!(
            doc.into_definition(sref(), PassingThreshold::default()),
            Err(DomainError::EmptyQuestionSet)
        );
    }

    #[test]
    fn test_zero_time_limit_is_rejected() {
        let doc = QuizDocument::from_toml(
            r#"
title = "Timed"
time_limit_seconds = 0

[[questions]]
id = "q1"
kind = "true_false"
prompt = "Yes?"
correct_answer = true
"#,
        )
        .unwrap();

        assert_eq!(
            doc.into_definition(sref(), PassingThreshold::default()),
            Err(DomainError::ZeroTimeLimit)
        );
    }

    #[test]
    fn test_mismatched_correctness_field_is_rejected() {
        let doc = QuizDocument::from_toml(
            r#"
title = "Broken"

[[questions]]
id = "q1"
kind = "true_false"
prompt = "Yes?"
correct_option_id = "a"
"#,
        )
        .unwrap();

        let err = doc
            .into_definition(sref(), PassingThreshold::default())
            .unwrap_err();
        assert!(err.is_configuration_error());
    }
}
