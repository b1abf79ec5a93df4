//! Quiz definitions.
//!
//! - [`definition::QuizDefinition`]: validated question set plus passing threshold and time limit
//! - [`countdown::Countdown`]: remaining-time arithmetic for timed quizzes

pub mod countdown;
pub mod definition;
