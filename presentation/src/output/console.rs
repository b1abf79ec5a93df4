//! Console output formatter for quiz results

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use quiz_application::{QuizSummary, TakeQuizOutput};
use quiz_domain::{FeedbackItem, QuizOutcome, SessionRef, format_mm_ss};

/// Formats quiz outcomes for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the complete outcome
    pub fn format(outcome: &QuizOutcome) -> String {
        let mut output = String::new();

        // Header
        output.push_str(&Self::header(&outcome.title));
        output.push('\n');

        output.push_str(&format!(
            "{} {}\n",
            "Quiz:".cyan().bold(),
            outcome.session_ref
        ));
        output.push_str(&format!(
            "{} {}\n\n",
            "Attempt:".cyan().bold(),
            outcome.attempt
        ));

        output.push_str(&Self::score_line(outcome));
        output.push('\n');

        // Feedback
        output.push_str(&Self::section_header("Feedback"));
        for (position, item) in outcome.feedback.iter().enumerate() {
            output.push_str(&Self::feedback_item(position + 1, item));
        }

        output.push_str(&Self::footer());

        output
    }

    /// Format as JSON
    pub fn format_json(outcome: &QuizOutcome) -> String {
        serde_json::to_string_pretty(outcome).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format the score line only
    pub fn format_summary(outcome: &QuizOutcome) -> String {
        format!("{} {}", format!("{}:", outcome.title).bold(), Self::score_line(outcome))
    }

    /// Score plus pass/fail verdict, e.g. `Score: 8/10 (80%) PASSED (pass mark 70%)`
    fn score_line(outcome: &QuizOutcome) -> String {
        let verdict = if outcome.passed() {
            "PASSED".green().bold()
        } else {
            "FAILED".red().bold()
        };
        format!(
            "{} {} {} (pass mark {}%)",
            "Score:".cyan().bold(),
            outcome.score.summary(),
            verdict,
            outcome.score.passing_threshold
        )
    }

    fn feedback_item(position: usize, item: &FeedbackItem) -> String {
        let mut output = String::new();

        let mark = if item.is_correct {
            "✓".green().bold()
        } else {
            "✗".red().bold()
        };
        output.push_str(&format!("\n{} {}. {}\n", mark, position, item.prompt));

        let answer = match &item.user_answer_label {
            Some(label) => label.clone(),
            None => "(no answer)".dimmed().to_string(),
        };
        output.push_str(&format!("    Your answer:    {}\n", answer));
        if !item.is_correct {
            output.push_str(&format!(
                "    Correct answer: {}\n",
                item.correct_answer_label.green()
            ));
        }
        if !item.explanation.is_empty() {
            output.push_str(&Self::indent(&item.explanation, "    "));
            output.push('\n');
        }

        output
    }

    /// Format a single attempt line for the end-of-session recap
    pub fn format_session_recap(output: &TakeQuizOutput) -> String {
        let mut text = String::new();

        if output.attempts.is_empty() {
            text.push_str(&format!(
                "{} {} was not submitted\n",
                "Quit:".yellow().bold(),
                output.session_ref
            ));
            return text;
        }

        text.push_str(&Self::section_header("Attempts"));
        for record in &output.attempts {
            let mut notes = Vec::new();
            if record.timed_out {
                notes.push("time limit reached");
            }
            if !record.result_recorded {
                notes.push("not recorded");
            }
            let notes = if notes.is_empty() {
                String::new()
            } else {
                format!(" ({})", notes.join(", ")).dimmed().to_string()
            };
            let verdict = if record.outcome.passed() {
                "passed".green()
            } else {
                "failed".red()
            };
            text.push_str(&format!(
                "  #{} {} {}{}\n",
                record.outcome.attempt,
                record.outcome.score.summary(),
                verdict,
                notes
            ));
        }
        if output.abandoned {
            text.push_str(&format!("  {}\n", "last attempt abandoned".dimmed()));
        }

        text
    }

    /// Format a validated quiz summary
    pub fn format_quiz_summary(summary: &QuizSummary) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "{} {} {}\n",
            "✓".green().bold(),
            summary.session_ref.to_string().bold(),
            summary.title
        ));
        output.push_str(&format!(
            "    {} questions",
            summary.total_questions
        ));
        let kinds: Vec<String> = summary
            .kind_counts
            .iter()
            .filter(|(_, count)| *count > 0)
            .map(|(kind, count)| format!("{} {}", count, kind.display_name().to_lowercase()))
            .collect();
        if !kinds.is_empty() {
            output.push_str(&format!(" ({})", kinds.join(", ")));
        }
        output.push('\n');

        output.push_str(&format!("    pass mark {}%", summary.passing_threshold));
        if let Some(limit) = summary.time_limit {
            output.push_str(&format!(", time limit {}", format_mm_ss(limit)));
        }
        output.push('\n');

        output
    }

    /// Format a quiz that failed to load or validate
    pub fn format_invalid_quiz(session_ref: &SessionRef, error: &dyn std::fmt::Display) -> String {
        format!(
            "{} {}\n    {}\n",
            "✗".red().bold(),
            session_ref.to_string().bold(),
            error
        )
    }

    /// Format a list of available quizzes
    pub fn format_quiz_list(quizzes: &[SessionRef]) -> String {
        if quizzes.is_empty() {
            return format!("{}\n", "No quizzes found.".dimmed());
        }
        quizzes
            .iter()
            .map(|q| format!("  {}\n", q))
            .collect()
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, outcome: &QuizOutcome) -> String {
        Self::format(outcome)
    }

    fn format_json(&self, outcome: &QuizOutcome) -> String {
        Self::format_json(outcome)
    }

    fn format_summary(&self, outcome: &QuizOutcome) -> String {
        Self::format_summary(outcome)
    }
}
