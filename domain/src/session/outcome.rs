//! Quiz outcome value object

use crate::core::session_ref::SessionRef;
use crate::scoring::feedback::FeedbackItem;
use crate::scoring::score::ScoreResult;
use serde::{Deserialize, Serialize};

/// Result of submitting a quiz session: the score and the ordered feedback
/// list, both derived from the same final answers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizOutcome {
    pub session_ref: SessionRef,
    pub title: String,
    pub attempt: u32,
    pub score: ScoreResult,
    pub feedback: Vec<FeedbackItem>,
}

impl QuizOutcome {
    pub fn passed(&self) -> bool {
        self.score.passed
    }

    pub fn incorrect(&self) -> impl Iterator<Item = &FeedbackItem> {
        self.feedback.iter().filter(|f| !f.is_correct)
    }
}
