//! Raw question records as stored in content files
//!
//! A [`QuestionRecord`] mirrors the loosely-typed shape used by content
//! authors: every correctness field is optional. Converting it into a
//! [`Question`] checks that exactly the field matching `kind` is set.

use super::entities::{Question, QuestionBody, QuestionOption};
use super::kind::QuestionKind;
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub id: String,
    pub kind: QuestionKind,
    pub prompt: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<QuestionOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correct_option_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correct_answer: Option<bool>,
    #[serde(default)]
    pub explanation: String,
}

impl TryFrom<QuestionRecord> for Question {
    type Error = DomainError;

    fn try_from(record: QuestionRecord) -> Result<Self, Self::Error> {
        let kind = record.kind;
        let unexpected = |field: &'static str| DomainError::UnexpectedField {
            question_id: record.id.clone(),
            kind: kind.to_string(),
            field,
        };
        let missing = |field: &'static str| DomainError::MissingCorrectness {
            question_id: record.id.clone(),
            kind: kind.to_string(),
            field,
        };

        let body = match kind {
            QuestionKind::TrueFalse => {
                if record.correct_option_id.is_some() {
                    return Err(unexpected("correct_option_id"));
                }
                if !record.options.is_empty() {
                    return Err(unexpected("options"));
                }
                let correct_answer = record.correct_answer.ok_or_else(|| missing("correct_answer"))?;
                QuestionBody::TrueFalse { correct_answer }
            }
            QuestionKind::MultipleChoice | QuestionKind::ImageChoice => {
                if record.correct_answer.is_some() {
                    return Err(unexpected("correct_answer"));
                }
                let correct_option_id = record
                    .correct_option_id
                    .clone()
                    .ok_or_else(|| missing("correct_option_id"))?;
                let options = record.options.clone();
                if kind == QuestionKind::MultipleChoice {
                    QuestionBody::MultipleChoice {
                        options,
                        correct_option_id,
                    }
                } else {
                    QuestionBody::ImageChoice {
                        options,
                        correct_option_id,
                    }
                }
            }
        };

        Question::new(record.id, record.prompt, body, record.explanation)
    }
}

impl From<&Question> for QuestionRecord {
    fn from(question: &Question) -> Self {
        let (correct_option_id, correct_answer) = match question.body() {
            QuestionBody::MultipleChoice {
                correct_option_id, ..
            }
            | QuestionBody::ImageChoice {
                correct_option_id, ..
            } => (Some(correct_option_id.clone()), None),
            QuestionBody::TrueFalse { correct_answer } => (None, Some(*correct_answer)),
        };

        Self {
            id: question.id().to_string(),
            kind: question.kind(),
            prompt: question.prompt().to_string(),
            options: question.options().to_vec(),
            correct_option_id,
            correct_answer,
            explanation: question.explanation().to_string(),
        }
    }
}
