//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod grade_answers;
pub(crate) mod shared;
pub mod take_quiz;
pub mod validate_quiz;
