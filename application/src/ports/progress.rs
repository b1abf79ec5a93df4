//! Progress notification port
//!
//! Defines the interface for reporting progress through a quiz session.

use quiz_domain::{QuizDefinition, QuizOutcome};

/// Callback for progress updates during a quiz session
///
/// Implementations live in the presentation layer.
pub trait QuizProgressNotifier: Send + Sync {
    /// Called when an attempt starts
    fn on_attempt_start(&self, definition: &QuizDefinition, attempt: u32);

    /// Called whenever an answer is stored
    fn on_answer_recorded(&self, answered: usize, total: usize);

    /// Called once the attempt has been scored
    fn on_submitted(&self, outcome: &QuizOutcome);

    /// Called when an enforced time limit forces submission
    fn on_time_expired(&self) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl QuizProgressNotifier for NoProgress {
    fn on_attempt_start(&self, _definition: &QuizDefinition, _attempt: u32) {}
    fn on_answer_recorded(&self, _answered: usize, _total: usize) {}
    fn on_submitted(&self, _outcome: &QuizOutcome) {}
}
