//! Question kind value object

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The kind of a quiz question
///
/// # Example
///
/// ```
/// use quiz_domain::QuestionKind;
///
/// let kind: QuestionKind = "true_false".parse().unwrap();
/// assert_eq!(kind, QuestionKind::TrueFalse);
/// assert!(!kind.uses_options());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    /// Pick one option out of a list of text options
    MultipleChoice,
    /// Answer true or false
    TrueFalse,
    /// Pick one option out of a list of images
    ImageChoice,
}

impl QuestionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionKind::MultipleChoice => "multiple_choice",
            QuestionKind::TrueFalse => "true_false",
            QuestionKind::ImageChoice => "image_choice",
        }
    }

    /// Human-readable label for display
    pub fn display_name(&self) -> &'static str {
        match self {
            QuestionKind::MultipleChoice => "Multiple choice",
            QuestionKind::TrueFalse => "True / False",
            QuestionKind::ImageChoice => "Image choice",
        }
    }

    /// Whether questions of this kind are answered by picking an option id
    pub fn uses_options(&self) -> bool {
        match self {
            QuestionKind::MultipleChoice | QuestionKind::ImageChoice => true,
            QuestionKind::TrueFalse => false,
        }
    }

    pub fn all() -> [QuestionKind; 3] {
        [
            QuestionKind::MultipleChoice,
            QuestionKind::TrueFalse,
            QuestionKind::ImageChoice,
        ]
    }
}

impl std::fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for QuestionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "multiple_choice" | "mcq" => Ok(QuestionKind::MultipleChoice),
            "true_false" | "truefalse" | "boolean" => Ok(QuestionKind::TrueFalse),
            "image_choice" | "image" => Ok(QuestionKind::ImageChoice),
            _ => Err(format!("Unknown question kind: {}", s)),
        }
    }
}
