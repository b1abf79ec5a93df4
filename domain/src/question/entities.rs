//! Question entities

use super::kind::QuestionKind;
use crate::answer::value::AnswerValue;
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// A selectable option of a choice question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionOption {
    pub id: String,
    pub label: String,
    /// Image reference (URL or asset path), required for image-choice questions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl QuestionOption {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            image: None,
        }
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }
}

/// Kind-specific payload of a [`Question`].
///
/// Each variant carries exactly the correctness criterion its kind needs,
/// so a true/false question can never hold a correct option id and vice versa.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionBody {
    MultipleChoice {
        options: Vec<QuestionOption>,
        correct_option_id: String,
    },
    TrueFalse {
        correct_answer: bool,
    },
    ImageChoice {
        options: Vec<QuestionOption>,
        correct_option_id: String,
    },
}

impl QuestionBody {
    pub fn kind(&self) -> QuestionKind {
        match self {
            QuestionBody::MultipleChoice { .. } => QuestionKind::MultipleChoice,
            QuestionBody::TrueFalse { .. } => QuestionKind::TrueFalse,
            QuestionBody::ImageChoice { .. } => QuestionKind::ImageChoice,
        }
    }
}

/// A validated quiz question (Entity)
///
/// Build one with [`Question::multiple_choice`], [`Question::true_false`],
/// [`Question::image_choice`], or by converting a
/// [`QuestionRecord`](super::record::QuestionRecord).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    id: String,
    prompt: String,
    explanation: String,
    body: QuestionBody,
}

impl Question {
    /// Create a question from an already-built body, validating it.
    pub fn new(
        id: impl Into<String>,
        prompt: impl Into<String>,
        body: QuestionBody,
        explanation: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let question = Self {
            id: id.into(),
            prompt: prompt.into(),
            explanation: explanation.into(),
            body,
        };
        question.validate()?;
        Ok(question)
    }

    pub fn multiple_choice(
        id: impl Into<String>,
        prompt: impl Into<String>,
        options: Vec<QuestionOption>,
        correct_option_id: impl Into<String>,
        explanation: impl Into<String>,
    ) -> Result<Self, DomainError> {
        Self::new(
            id,
            prompt,
            QuestionBody::MultipleChoice {
                options,
                correct_option_id: correct_option_id.into(),
            },
            explanation,
        )
    }

    pub fn true_false(
        id: impl Into<String>,
        prompt: impl Into<String>,
        correct_answer: bool,
        explanation: impl Into<String>,
    ) -> Result<Self, DomainError> {
        Self::new(
            id,
            prompt,
            QuestionBody::TrueFalse { correct_answer },
            explanation,
        )
    }

    pub fn image_choice(
        id: impl Into<String>,
        prompt: impl Into<String>,
        options: Vec<QuestionOption>,
        correct_option_id: impl Into<String>,
        explanation: impl Into<String>,
    ) -> Result<Self, DomainError> {
        Self::new(
            id,
            prompt,
            QuestionBody::ImageChoice {
                options,
                correct_option_id: correct_option_id.into(),
            },
            explanation,
        )
    }

    fn validate(&self) -> Result<(), DomainError> {
        if self.id.trim().is_empty() {
            return Err(DomainError::EmptyQuestionId);
        }
        if self.prompt.trim().is_empty() {
            return Err(DomainError::EmptyPrompt {
                question_id: self.id.clone(),
            });
        }

        let (options, correct_option_id) = match &self.body {
            QuestionBody::TrueFalse { .. } => return Ok(()),
            QuestionBody::MultipleChoice {
                options,
                correct_option_id,
            }
            | QuestionBody::ImageChoice {
                options,
                correct_option_id,
            } => (options, correct_option_id),
        };

        if options.is_empty() {
            return Err(DomainError::MissingOptions {
                question_id: self.id.clone(),
                kind: self.kind().to_string(),
            });
        }

        let mut seen = std::collections::HashSet::new();
        for option in options {
            if !seen.insert(option.id.as_str()) {
                return Err(DomainError::DuplicateOptionId {
                    question_id: self.id.clone(),
                    option_id: option.id.clone(),
                });
            }
            if self.kind() == QuestionKind::ImageChoice
                && option.image.as_deref().is_none_or(|i| i.trim().is_empty())
            {
                return Err(DomainError::MissingImage {
                    question_id: self.id.clone(),
                    option_id: option.id.clone(),
                });
            }
        }

        if !seen.contains(correct_option_id.as_str()) {
            return Err(DomainError::UnknownCorrectOption {
                question_id: self.id.clone(),
                option_id: correct_option_id.clone(),
            });
        }

        Ok(())
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Explanation shown after scoring, whether or not the answer was correct
    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    pub fn body(&self) -> &QuestionBody {
        &self.body
    }

    pub fn kind(&self) -> QuestionKind {
        self.body.kind()
    }

    /// Options in display order (empty for true/false questions)
    pub fn options(&self) -> &[QuestionOption] {
        match &self.body {
            QuestionBody::MultipleChoice { options, .. }
            | QuestionBody::ImageChoice { options, .. } => options,
            QuestionBody::TrueFalse { .. } => &[],
        }
    }

    pub fn option(&self, option_id: &str) -> Option<&QuestionOption> {
        self.options().iter().find(|o| o.id == option_id)
    }

    /// The value a correct answer must equal
    pub fn correct_value(&self) -> AnswerValue {
        match &self.body {
            QuestionBody::MultipleChoice {
                correct_option_id, ..
            }
            | QuestionBody::ImageChoice {
                correct_option_id, ..
            } => AnswerValue::Option(correct_option_id.clone()),
            QuestionBody::TrueFalse { correct_answer } => AnswerValue::Boolean(*correct_answer),
        }
    }

    /// Display label for an answer value in the context of this question.
    ///
    /// Option ids resolve to their label; unknown ids are shown verbatim.
    pub fn answer_label(&self, value: &AnswerValue) -> String {
        match value {
            AnswerValue::Option(id) => self
                .option(id)
                .map(|o| o.label.clone())
                .unwrap_or_else(|| id.clone()),
            AnswerValue::Boolean(true) => "True".to_string(),
            AnswerValue::Boolean(false) => "False".to_string(),
        }
    }

    /// Check that `value` has the shape this question's kind accepts.
    pub fn check_answer(&self, value: &AnswerValue) -> Result<(), DomainError> {
        match (&self.body, value) {
            (QuestionBody::TrueFalse { .. }, AnswerValue::Boolean(_)) => Ok(()),
            (
                QuestionBody::MultipleChoice { .. } | QuestionBody::ImageChoice { .. },
                AnswerValue::Option(option_id),
            ) => {
                if self.option(option_id).is_some() {
                    Ok(())
                } else {
                    Err(DomainError::UnknownOption {
                        question_id: self.id.clone(),
                        option_id: option_id.clone(),
                    })
                }
            }
            (body, value) => Err(DomainError::AnswerKindMismatch {
                question_id: self.id.clone(),
                expected: if body.kind().uses_options() {
                    "an option id"
                } else {
                    "true or false"
                },
                actual: value.type_name(),
            }),
        }
    }
}
