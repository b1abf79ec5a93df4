//! Answer value object

use serde::{Deserialize, Serialize};

/// A value chosen by the user for one question.
///
/// Serialized untagged, so `"b"` is an option id and `false` a boolean.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    /// Id of the selected option (multiple-choice and image-choice questions)
    Option(String),
    /// Selected truth value (true/false questions)
    Boolean(bool),
}

impl AnswerValue {
    pub fn option(id: impl Into<String>) -> Self {
        AnswerValue::Option(id.into())
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            AnswerValue::Option(_) => "an option id",
            AnswerValue::Boolean(_) => "a boolean",
        }
    }
}

impl From<bool> for AnswerValue {
    fn from(value: bool) -> Self {
        AnswerValue::Boolean(value)
    }
}

impl From<&str> for AnswerValue {
    fn from(value: &str) -> Self {
        AnswerValue::Option(value.to_string())
    }
}

impl From<String> for AnswerValue {
    fn from(value: String) -> Self {
        AnswerValue::Option(value)
    }
}

impl std::fmt::Display for AnswerValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnswerValue::Option(id) => write!(f, "{}", id),
            AnswerValue::Boolean(b) => write!(f, "{}", b),
        }
    }
}
