//! Progress reporting for quiz sessions

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use quiz_application::QuizProgressNotifier;
use quiz_domain::{QuizDefinition, QuizOutcome};
use std::sync::Mutex;

/// Shows answered questions as a progress bar on stderr
pub struct ProgressReporter {
    bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn answered_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{prefix:.bold.cyan} [{bar:30.cyan/blue}] {pos}/{len} answered {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    fn with_bar(&self, f: impl FnOnce(&ProgressBar)) {
        if let Ok(guard) = self.bar.lock()
            && let Some(bar) = guard.as_ref()
        {
            f(bar);
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl QuizProgressNotifier for ProgressReporter {
    fn on_attempt_start(&self, definition: &QuizDefinition, attempt: u32) {
        let pb = ProgressBar::new(definition.total_questions() as u64);
        pb.set_style(Self::answered_style());
        pb.set_prefix(format!("{} #{}", definition.title(), attempt));

        if let Ok(mut guard) = self.bar.lock()
            && let Some(previous) = guard.replace(pb)
        {
            previous.finish_and_clear();
        }
    }

    fn on_answer_recorded(&self, answered: usize, _total: usize) {
        self.with_bar(|bar| bar.set_position(answered as u64));
    }

    fn on_submitted(&self, outcome: &QuizOutcome) {
        if let Ok(mut guard) = self.bar.lock()
            && let Some(bar) = guard.take()
        {
            bar.finish_and_clear();
        }
        eprintln!(
            "{} {} submitted",
            "->".cyan(),
            outcome.session_ref.to_string().bold()
        );
    }

    fn on_time_expired(&self) {
        self.with_bar(|bar| bar.set_message("time is up".red().to_string()));
    }
}

/// Simple text-based progress (no fancy UI), one line per event.
///
/// Used when stderr is not a terminal, where a redrawn bar would only
/// produce noise.
pub struct SimpleProgress;

impl SimpleProgress {
    fn start_line(definition: &QuizDefinition, attempt: u32) -> String {
        format!(
            "{} {} attempt {} ({} questions)",
            "->".cyan(),
            definition.title().bold(),
            attempt,
            definition.total_questions()
        )
    }

    fn answered_line(answered: usize, total: usize) -> String {
        format!("  {} {}/{} answered", "v".green(), answered, total)
    }
}

impl QuizProgressNotifier for SimpleProgress {
    fn on_attempt_start(&self, definition: &QuizDefinition, attempt: u32) {
        eprintln!("{}", Self::start_line(definition, attempt));
    }

    fn on_answer_recorded(&self, answered: usize, total: usize) {
        eprintln!("{}", Self::answered_line(answered, total));
    }

    fn on_submitted(&self, _outcome: &QuizOutcome) {
        eprintln!();
    }

    fn on_time_expired(&self) {
        eprintln!("  {} time is up", "x".red());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_domain::{PassingThreshold, Question, SessionRef};

    fn definition() -> QuizDefinition {
        QuizDefinition::new(
            SessionRef::new("c", "q"),
            "Quiz",
            vec![
                Question::true_false("q1", "A?", true, "").unwrap(),
                Question::true_false("q2", "B?", false, "").unwrap(),
            ],
            PassingThreshold::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_reporter_tracks_answered_count() {
        let reporter = ProgressReporter::new();
        reporter.on_attempt_start(&definition(), 1);
        reporter.on_answer_recorded(1, 2);

        let position = reporter
            .bar
            .lock()
            .unwrap()
            .as_ref()
            .map(|bar| (bar.position(), bar.length()));
        assert_eq!(position, Some((1, Some(2))));
    }

    #[test]
    fn test_reporter_ignores_updates_before_start() {
        let reporter = ProgressReporter::new();
        reporter.on_answer_recorded(1, 2);
        assert!(reporter.bar.lock().unwrap().is_none());
    }

    #[test]
    fn test_simple_progress_lines() {
        colored::control::set_override(false);
        assert_eq!(
            SimpleProgress::start_line(&definition(), 2),
            "-> Quiz attempt 2 (2 questions)"
        );
        assert_eq!(SimpleProgress::answered_line(1, 2), "  v 1/2 answered");
    }
}
