//! Presentation layer for lms-quiz
//!
//! This crate contains CLI definitions, output formatters,
//! progress reporters, and the interactive terminal front end.

pub mod cli;
pub mod interaction;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, OutputFormat, QuizArgs};
pub use interaction::{LineReader, TerminalQuizInteraction};
pub use output::console::ConsoleFormatter;
pub use output::formatter::OutputFormatter;
pub use progress::reporter::{ProgressReporter, SimpleProgress};
