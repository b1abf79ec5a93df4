//! Quiz interaction port
//!
//! The take-quiz use case asks this port what the user wants to do next.
//!
//! # Architecture
//!
//! - **Port**: [`QuizInteraction`] - defined here in application layer
//! - **Adapter**: `TerminalQuizInteraction` - line editor in presentation layer
//! - **Adapter**: [`ScriptedInteraction`] - replays a fixed command list
//!
//! # Flow
//!
//! ```text
//! view current question
//!        ↓
//! QuizInteraction::next_command()
//!        ↓
//! Answer / Next / Previous / GoTo / Submit / Quit
//!        ↓ (Submit)
//! QuizInteraction::after_submit()
//!        ↓
//! Retry (fresh attempt) / Finish
//! ```

use async_trait::async_trait;
use quiz_domain::{AnswerValue, QuestionView, QuizOutcome};
use std::collections::VecDeque;
use std::sync::Mutex;
use thiserror::Error;

/// A user command while a quiz attempt is in progress
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizCommand {
    /// Answer the current question
    Answer(AnswerValue),
    Next,
    Previous,
    /// Jump to a zero-based question index
    GoTo(usize),
    Submit,
    /// Abandon the session without submitting
    Quit,
}

/// What to do after an attempt has been scored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostSubmitChoice {
    /// Start a fresh attempt with no answers
    Retry,
    Finish,
}

/// Errors while talking to the user.
///
/// These represent failures of the interaction itself, not user choices.
#[derive(Error, Debug, Clone)]
pub enum InteractionError {
    #[error("Operation cancelled")]
    Cancelled,

    #[error("I/O error: {0}")]
    Io(String),
}

#[async_trait]
pub trait QuizInteraction: Send + Sync {
    /// Show the current question and return the user's next command.
    async fn next_command(&self, view: &QuestionView) -> Result<QuizCommand, InteractionError>;

    /// Show the outcome and ask whether to retry.
    async fn after_submit(&self, outcome: &QuizOutcome)
    -> Result<PostSubmitChoice, InteractionError>;

    /// Tell the user a command was rejected (e.g. an answer of the wrong kind).
    fn notify(&self, _message: &str) {}
}

/// Replays a fixed list of commands.
///
/// Once the command list is exhausted it submits; once the post-submit
/// choices are exhausted it finishes. Rejection messages are kept so callers
/// can inspect them.
#[derive(Default)]
pub struct ScriptedInteraction {
    commands: Mutex<VecDeque<QuizCommand>>,
    choices: Mutex<VecDeque<PostSubmitChoice>>,
    notices: Mutex<Vec<String>>,
}

impl ScriptedInteraction {
    pub fn new(commands: impl IntoIterator<Item = QuizCommand>) -> Self {
        Self {
            commands: Mutex::new(commands.into_iter().collect()),
            ..Default::default()
        }
    }

    pub fn with_choices(self, choices: impl IntoIterator<Item = PostSubmitChoice>) -> Self {
        if let Ok(mut queue) = self.choices.lock() {
            queue.extend(choices);
        }
        self
    }

    /// Messages passed to [`QuizInteraction::notify`] so far
    pub fn notices(&self) -> Vec<String> {
        self.notices
            .lock()
            .map(|n| n.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl QuizInteraction for ScriptedInteraction {
    async fn next_command(&self, _view: &QuestionView) -> Result<QuizCommand, InteractionError> {
        let mut queue = self
            .commands
            .lock()
            .map_err(|e| InteractionError::Io(e.to_string()))?;
        Ok(queue.pop_front().unwrap_or(QuizCommand::Submit))
    }

    async fn after_submit(
        &self,
        _outcome: &QuizOutcome,
    ) -> Result<PostSubmitChoice, InteractionError> {
        let mut queue = self
            .choices
            .lock()
            .map_err(|e| InteractionError::Io(e.to_string()))?;
        Ok(queue.pop_front().unwrap_or(PostSubmitChoice::Finish))
    }

    fn notify(&self, message: &str) {
        if let Ok(mut notices) = self.notices.lock() {
            notices.push(message.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_domain::{PassingThreshold, Question, QuizDefinition, QuizSession, SessionRef};

    fn view() -> QuestionView {
        let definition = QuizDefinition::new(
            SessionRef::new("c", "q"),
            "T",
            vec![Question::true_false("q1", "Statement", true, "").unwrap()],
            PassingThreshold::default(),
        )
        .unwrap();
        QuizSession::new(definition).view()
    }

    #[tokio::test]
    async fn test_scripted_replays_then_submits() {
        let interaction = ScriptedInteraction::new([QuizCommand::Next, QuizCommand::Previous]);
        let view = view();
        assert_eq!(interaction.next_command(&view).await.unwrap(), QuizCommand::Next);
        assert_eq!(interaction.next_command(&view).await.unwrap(), QuizCommand::Previous);
        assert_eq!(interaction.next_command(&view).await.unwrap(), QuizCommand::Submit);
    }

    #[tokio::test]
    async fn test_scripted_choices_default_to_finish() {
        let mut session = QuizSession::new(
            QuizDefinition::new(
                SessionRef::new("c", "q"),
                "T",
                vec![Question::true_false("q1", "Statement", true, "").unwrap()],
                PassingThreshold::default(),
            )
            .unwrap(),
        );
        let outcome = session.submit().unwrap().clone();

        let interaction = ScriptedInteraction::new(Vec::new()).with_choices([PostSubmitChoice::Retry]);
        assert_eq!(
            interaction.after_submit(&outcome).await.unwrap(),
            PostSubmitChoice::Retry
        );
        assert_eq!(
            interaction.after_submit(&outcome).await.unwrap(),
            PostSubmitChoice::Finish
        );
    }

    #[test]
    fn test_notify_is_recorded() {
        let interaction = ScriptedInteraction::default();
        interaction.notify("Question q1 expects true or false, got an option id");
        assert_eq!(interaction.notices().len(), 1);
    }
}
