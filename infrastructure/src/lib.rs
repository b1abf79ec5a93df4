//! Infrastructure layer for lms-quiz
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod content;
pub mod logging;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileLoggingConfig, FileOutputConfig,
    FileOutputFormat, FileQuizConfig,
};
pub use content::{
    AnswerSheetError, QuizDocument, SampleCatalog, TomlQuestionSetSource, load_answer_sheet,
    parse_answer_sheet,
};
pub use logging::{JsonlResultLog, TracingResultSubmitter};
