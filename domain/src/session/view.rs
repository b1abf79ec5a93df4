//! Question view value object

use crate::answer::value::AnswerValue;
use crate::question::entities::Question;
use std::time::Duration;

/// What an interactive front end needs to render the current question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionView {
    /// Zero-based index of the question
    pub index: usize,
    pub total: usize,
    pub question: Question,
    pub current_answer: Option<AnswerValue>,
    pub answered_count: usize,
    pub attempt: u32,
    /// Remaining time, for timed quizzes
    pub remaining: Option<Duration>,
}

impl QuestionView {
    /// One-based position label, e.g. "3/10"
    pub fn position(&self) -> String {
        format!("{}/{}", self.index + 1, self.total)
    }

    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    pub fn is_last(&self) -> bool {
        self.index + 1 == self.total
    }
}
