//! JSON answer sheets for non-interactive grading
//!
//! A sheet maps question ids to answers: strings are option ids, booleans
//! are true/false answers.
//!
//! ```json
//! { "q1": "b", "q2": false }
//! ```

use quiz_domain::AnswerMap;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnswerSheetError {
    #[error("Failed to read answer sheet {path}: {message}")]
    Io { path: String, message: String },

    #[error("Invalid answer sheet {path}: {message}")]
    Parse { path: String, message: String },
}

/// Parse an answer sheet from JSON text. `origin` is used in error messages.
pub fn parse_answer_sheet(text: &str, origin: &str) -> Result<AnswerMap, AnswerSheetError> {
    serde_json::from_str(text).map_err(|e| AnswerSheetError::Parse {
        path: origin.to_string(),
        message: e.to_string(),
    })
}

/// Read and parse an answer sheet file.
pub async fn load_answer_sheet(path: &Path) -> Result<AnswerMap, AnswerSheetError> {
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| AnswerSheetError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
    parse_answer_sheet(&text, &path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_domain::AnswerValue;

    #[test]
    fn test_parse_mixed_values() {
        let answers = parse_answer_sheet(r#"{ "q1": "b", "q2": false, "q3": true }"#, "inline")
            .unwrap();
        assert_eq!(answers.len(), 3);
        assert_eq!(answers.get("q1"), Some(&AnswerValue::option("b")));
        assert_eq!(answers.get("q2"), Some(&AnswerValue::Boolean(false)));
        assert_eq!(answers.get("q3"), Some(&AnswerValue::Boolean(true)));
    }

    #[test]
    fn test_parse_rejects_numbers() {
        let err = parse_answer_sheet(r#"{ "q1": 2 }"#, "inline").unwrap_err();
        assert!(matches!(err, AnswerSheetError::Parse { .. }));
    }

    #[test]
    fn test_parse_rejects_non_object() {
        assert!(parse_answer_sheet(r#"["b", false]"#, "inline").is_err());
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("answers.json");
        std::fs::write(&path, r#"{ "q1": "a" }"#).unwrap();

        let answers = load_answer_sheet(&path).await.unwrap();
        assert_eq!(answers.get("q1"), Some(&AnswerValue::option("a")));
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let err = load_answer_sheet(Path::new("/no/such/answers.json"))
            .await
            .unwrap_err();
        assert!(matches!(err, AnswerSheetError::Io { .. }));
    }
}
