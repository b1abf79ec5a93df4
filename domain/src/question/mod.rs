//! Question model.
//!
//! - [`kind::QuestionKind`]: multiple choice, true/false or image choice
//! - [`entities::Question`]: a validated question whose correctness criterion matches its kind
//! - [`record::QuestionRecord`]: raw, unvalidated question as read from content files
//! - [`set::QuestionSet`]: ordered, non-empty list of questions with unique ids

pub mod entities;
pub mod kind;
pub mod record;
pub mod set;
