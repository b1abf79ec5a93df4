//! Per-question feedback

use super::predicate::is_correct;
use crate::answer::map::AnswerMap;
use crate::answer::value::AnswerValue;
use crate::question::entities::Question;
use crate::question::kind::QuestionKind;
use serde::{Deserialize, Serialize};

/// Display-ready review of one question after submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackItem {
    pub question_id: String,
    pub prompt: String,
    pub kind: QuestionKind,
    /// The user's final answer, `None` if unanswered
    pub user_answer: Option<AnswerValue>,
    /// Label of the user's answer (option label or "True"/"False")
    pub user_answer_label: Option<String>,
    pub correct_answer_label: String,
    pub is_correct: bool,
    pub explanation: String,
}

impl FeedbackItem {
    pub fn is_unanswered(&self) -> bool {
        self.user_answer.is_none()
    }
}

/// Build one feedback item per question, in question order.
///
/// Pure: calling it twice with the same inputs yields identical output.
pub fn build_feedback(questions: &[Question], answers: &AnswerMap) -> Vec<FeedbackItem> {
    questions
        .iter()
        .map(|question| {
            let user_answer = answers.get(question.id());
            FeedbackItem {
                question_id: question.id().to_string(),
                prompt: question.prompt().to_string(),
                kind: question.kind(),
                user_answer: user_answer.cloned(),
                user_answer_label: user_answer.map(|v| question.answer_label(v)),
                correct_answer_label: question.answer_label(&question.correct_value()),
                is_correct: is_correct(question, user_answer),
                explanation: question.explanation().to_string(),
            }
        })
        .collect()
}
