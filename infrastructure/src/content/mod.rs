//! Quiz content adapters
//!
//! Implements [`QuestionSetSource`](quiz_application::QuestionSetSource) for
//! TOML files on disk and for the built-in sample catalog, plus the JSON
//! answer-sheet reader used by non-interactive grading.

mod answer_sheet;
mod document;
mod sample_catalog;
mod toml_source;

pub use answer_sheet::{AnswerSheetError, load_answer_sheet, parse_answer_sheet};
pub use document::QuizDocument;
pub use sample_catalog::SampleCatalog;
pub use toml_source::TomlQuestionSetSource;
