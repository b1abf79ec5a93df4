//! The correctness predicate shared by scoring and feedback.

use crate::answer::value::AnswerValue;
use crate::question::entities::{Question, QuestionBody};

/// Whether `answer` is the correct answer to `question`.
///
/// An absent answer never matches. Comparison is strict: a true/false
/// question only matches the boolean it expects, and a choice question only
/// matches its correct option id, so `"true"` never matches `true`.
pub fn is_correct(question: &Question, answer: Option<&AnswerValue>) -> bool {
    let Some(answer) = answer else {
        return false;
    };

    match (question.body(), answer) {
        (QuestionBody::TrueFalse { correct_answer }, AnswerValue::Boolean(value)) => {
            value == correct_answer
        }
        (
            QuestionBody::MultipleChoice {
                correct_option_id, ..
            }
            | QuestionBody::ImageChoice {
                correct_option_id, ..
            },
            AnswerValue::Option(option_id),
        ) => option_id == correct_option_id,
        (QuestionBody::TrueFalse { .. }, AnswerValue::Option(_))
        | (
            QuestionBody::MultipleChoice { .. } | QuestionBody::ImageChoice { .. },
            AnswerValue::Boolean(_),
        ) => false,
    }
}
