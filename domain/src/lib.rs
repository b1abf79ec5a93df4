//! Domain layer for lms-quiz
//!
//! This crate contains the quiz model, the scoring rules and the session
//! state machine. It has no dependencies on infrastructure or presentation
//! concerns and performs no I/O.
//!
//! # Core Concepts
//!
//! ## Question set
//!
//! A [`QuizDefinition`] holds an ordered, non-empty [`QuestionSet`] and a
//! [`PassingThreshold`]. Each [`Question`] is a tagged variant
//! ([`QuestionBody`]) whose correctness criterion always matches its kind.
//!
//! ## Scoring
//!
//! [`is_correct`] is the single correctness predicate. [`score`] aggregates
//! it into a [`ScoreResult`]; [`build_feedback`] maps it into
//! [`FeedbackItem`]s. Both read the same predicate, so feedback never
//! contradicts the score.
//!
//! ## Sessions
//!
//! A [`QuizSession`] collects answers into an [`AnswerMap`] while the user
//! navigates, then produces a [`QuizOutcome`] on submission.

pub mod answer;
pub mod config;
pub mod core;
pub mod question;
pub mod quiz;
pub mod scoring;
pub mod session;

// Re-export commonly used types
pub use answer::{map::AnswerMap, value::AnswerValue};
pub use config::{OutputFormat, TimerPolicy};
pub use core::{error::DomainError, session_ref::SessionRef};
pub use question::{
    entities::{Question, QuestionBody, QuestionOption},
    kind::QuestionKind,
    record::QuestionRecord,
    set::QuestionSet,
};
pub use quiz::{
    countdown::{Countdown, format_mm_ss},
    definition::QuizDefinition,
};
pub use scoring::{
    feedback::{FeedbackItem, build_feedback},
    predicate::is_correct,
    score::{ScoreResult, score},
    threshold::PassingThreshold,
};
pub use session::{
    entities::{QuizSession, SessionState},
    outcome::QuizOutcome,
    view::QuestionView,
};
