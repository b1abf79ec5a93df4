//! Interactive quiz front end
//!
//! [`TerminalQuizInteraction`] implements the application's
//! [`QuizInteraction`](quiz_application::QuizInteraction) port on top of a
//! [`LineReader`]. Keystroke parsing lives in [`input`] so it can be tested
//! without a terminal.

pub mod input;
pub mod line_reader;
pub mod terminal;

pub use input::{InputError, ParsedInput, parse_command, parse_post_submit};
pub use line_reader::LineReader;
pub use terminal::TerminalQuizInteraction;
