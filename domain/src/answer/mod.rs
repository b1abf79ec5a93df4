//! Answer collection.
//!
//! - [`value::AnswerValue`]: an option id or a boolean
//! - [`map::AnswerMap`]: the user's last selected value per question id

pub mod map;
pub mod value;
