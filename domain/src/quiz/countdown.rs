//! Countdown for timed quizzes and `MM:SS` formatting
//!
//! Pure arithmetic over a time limit and an elapsed duration. Whether an
//! expired countdown does anything is decided by
//! [`TimerPolicy`](crate::TimerPolicy), not here.

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    limit: Duration,
}

impl Countdown {
    pub fn new(limit: Duration) -> Self {
        Self { limit }
    }

    pub fn remaining(&self, elapsed: Duration) -> Duration {
        self.limit.saturating_sub(elapsed)
    }

    pub fn is_expired(&self, elapsed: Duration) -> bool {
        elapsed >= self.limit
    }
}

/// Format a duration as `MM:SS`, truncating sub-second parts.
/// Minutes are not wrapped at 60.
pub fn format_mm_ss(duration: Duration) -> String {
    let secs = duration.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}
