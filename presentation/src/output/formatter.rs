//! Output formatter trait

use quiz_domain::{OutputFormat, QuizOutcome};

/// Trait for formatting submitted quiz outcomes
pub trait OutputFormatter {
    /// Format the full report: score, verdict and per-question feedback
    fn format(&self, outcome: &QuizOutcome) -> String;

    /// Format as JSON
    fn format_json(&self, outcome: &QuizOutcome) -> String;

    /// Format the score line only (concise output)
    fn format_summary(&self, outcome: &QuizOutcome) -> String;

    /// Dispatch on the configured output format
    fn render(&self, outcome: &QuizOutcome, format: OutputFormat) -> String {
        match format {
            OutputFormat::Full => self.format(outcome),
            OutputFormat::Summary => self.format_summary(outcome),
            OutputFormat::Json => self.format_json(outcome),
        }
    }
}
