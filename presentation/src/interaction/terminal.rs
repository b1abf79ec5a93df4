//! Line-editor quiz interaction

use super::input::{HELP_TEXT, ParsedInput, parse_command, parse_post_submit};
use super::line_reader::LineReader;
use crate::output::console::ConsoleFormatter;
use crate::output::formatter::OutputFormatter;
use async_trait::async_trait;
use colored::Colorize;
use quiz_application::{InteractionError, PostSubmitChoice, QuizCommand, QuizInteraction};
use quiz_domain::{
    AnswerValue, OutputFormat, QuestionBody, QuestionView, QuizOutcome, format_mm_ss,
};

/// Drives a quiz session from the terminal.
///
/// Renders each question to stdout and reads commands through a
/// [`LineReader`]. Ctrl-C, Ctrl-D or end of input leave the session
/// without submitting.
pub struct TerminalQuizInteraction {
    format: OutputFormat,
    reader: LineReader,
}

impl TerminalQuizInteraction {
    pub fn new(format: OutputFormat) -> Self {
        Self::with_reader(format, LineReader::new())
    }

    pub fn with_reader(format: OutputFormat, reader: LineReader) -> Self {
        Self { format, reader }
    }

    /// Render the question and its choices, marking the current answer.
    pub fn render_question(view: &QuestionView) -> String {
        let mut output = String::new();

        let mut status = format!(
            "Question {}  ·  answered {}/{}",
            view.position(),
            view.answered_count,
            view.total
        );
        if let Some(remaining) = view.remaining {
            status.push_str(&format!("  ·  time left {}", format_mm_ss(remaining)));
        }
        if view.attempt > 1 {
            status.push_str(&format!("  ·  attempt {}", view.attempt));
        }
        output.push_str(&format!("\n{}\n", status.dimmed()));
        output.push_str(&format!(
            "{} {}\n",
            format!("[{}]", view.question.kind().display_name()).cyan(),
            view.question.prompt().bold()
        ));

        let selected = view.current_answer.as_ref();
        match view.question.body() {
            QuestionBody::TrueFalse { .. } => {
                for (key, value) in [("t", true), ("f", false)] {
                    let answer = AnswerValue::Boolean(value);
                    output.push_str(&choice_line(
                        key,
                        &view.question.answer_label(&answer),
                        None,
                        selected == Some(&answer),
                    ));
                }
            }
            QuestionBody::MultipleChoice { options, .. }
            | QuestionBody::ImageChoice { options, .. } => {
                for option in options {
                    let is_selected = matches!(
                        selected,
                        Some(AnswerValue::Option(id)) if *id == option.id
                    );
                    output.push_str(&choice_line(
                        &option.id,
                        &option.label,
                        option.image.as_deref(),
                        is_selected,
                    ));
                }
            }
        }

        output
    }
}

fn choice_line(key: &str, label: &str, image: Option<&str>, selected: bool) -> String {
    let marker = if selected { "●".green().bold() } else { " ".normal() };
    let mut line = format!("  {} [{}] {}", marker, key.yellow(), label);
    if let Some(image) = image {
        line.push_str(&format!(" {}", format!("({})", image).dimmed()));
    }
    line.push('\n');
    line
}

#[async_trait]
impl QuizInteraction for TerminalQuizInteraction {
    async fn next_command(&self, view: &QuestionView) -> Result<QuizCommand, InteractionError> {
        print!("{}", Self::render_question(view));

        loop {
            let Some(line) = self.reader.read_line("answer").await? else {
                return Ok(QuizCommand::Quit);
            };

            match parse_command(&line, view) {
                Ok(ParsedInput::Command(command)) => return Ok(command),
                Ok(ParsedInput::Help) => println!("{}", HELP_TEXT),
                Ok(ParsedInput::Empty) => {}
                Err(e) => println!("{}", e.to_string().yellow()),
            }
        }
    }

    async fn after_submit(
        &self,
        outcome: &QuizOutcome,
    ) -> Result<PostSubmitChoice, InteractionError> {
        println!("{}", ConsoleFormatter.render(outcome, self.format));

        eprintln!("{}", "[r]etry or [q]uit".dimmed());
        match self.reader.read_line("next").await? {
            Some(line) => Ok(parse_post_submit(&line)),
            None => Ok(PostSubmitChoice::Finish),
        }
    }

    fn notify(&self, message: &str) {
        println!("{}", message.yellow());
    }
}
