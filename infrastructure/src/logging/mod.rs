//! Result logging adapters
//!
//! Implementations of [`QuizResultSubmitter`](quiz_application::QuizResultSubmitter)
//! that record submitted results locally.

mod jsonl_result_log;
mod tracing_submitter;

pub use jsonl_result_log::JsonlResultLog;
pub use tracing_submitter::TracingResultSubmitter;
