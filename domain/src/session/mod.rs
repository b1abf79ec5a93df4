//! Quiz session domain.
//!
//! - [`entities::QuizSession`]: answers, navigation and submission for one attempt
//! - [`view::QuestionView`]: snapshot of the current question for display
//! - [`outcome::QuizOutcome`]: score plus feedback produced at submission

pub mod entities;
pub mod outcome;
pub mod view;
