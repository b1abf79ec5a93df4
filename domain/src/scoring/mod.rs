//! Scoring and feedback.
//!
//! Both the scorer and the feedback builder go through
//! [`predicate::is_correct`], so the feedback shown for a question can never
//! contradict the score it contributed to.
//!
//! - [`threshold::PassingThreshold`]: minimum percent needed to pass
//! - [`score::ScoreResult`] / [`score::score`]: aggregate outcome
//! - [`feedback::FeedbackItem`] / [`feedback::build_feedback`]: per-question review

pub mod feedback;
pub mod predicate;
pub mod score;
pub mod threshold;
