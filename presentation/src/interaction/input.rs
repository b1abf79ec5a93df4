//! Parsing of typed quiz commands
//!
//! | Input            | Meaning                         |
//! |------------------|---------------------------------|
//! | `<option id>`    | choose that option              |
//! | `t` / `f`        | answer true / false             |
//! | `n`, `next`      | next question                   |
//! | `p`, `prev`      | previous question               |
//! | `g <n>`          | go to question `n` (one-based)  |
//! | `s`, `submit`    | submit the attempt              |
//! | `q`, `quit`      | leave without submitting        |
//! | `?`, `h`, `help` | show the key list               |

use quiz_application::{PostSubmitChoice, QuizCommand};
use quiz_domain::{AnswerValue, QuestionView};
use thiserror::Error;

/// Result of parsing one input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedInput {
    Command(QuizCommand),
    Help,
    /// Blank line; re-prompt
    Empty,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Unknown command '{0}' (type ? for help)")]
    Unknown(String),

    #[error("Question number must be between 1 and {total}")]
    BadQuestionNumber { total: usize },
}

pub const HELP_TEXT: &str = "\
  <id>     choose an option        t / f    answer true / false
  n        next question           p        previous question
  g <n>    go to question n        s        submit
  q        quit without submitting ?        this help";

/// Parse a line typed while `view` is on screen.
///
/// Option ids of the current question take precedence over the
/// single-letter commands, so a quiz with an option `n` can still be
/// answered; `next` always navigates.
pub fn parse_command(input: &str, view: &QuestionView) -> Result<ParsedInput, InputError> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(ParsedInput::Empty);
    }

    let options = view.question.options();
    if let Some(option) = options
        .iter()
        .find(|o| o.id == input)
        .or_else(|| options.iter().find(|o| o.id.eq_ignore_ascii_case(input)))
    {
        return Ok(ParsedInput::Command(QuizCommand::Answer(
            AnswerValue::option(option.id.clone()),
        )));
    }

    let lower = input.to_lowercase();
    let mut words = lower.split_whitespace();
    let head = words.next().unwrap_or_default();
    let arg = words.next();

    let command = match (head, arg) {
        ("n" | "next", None) => QuizCommand::Next,
        ("p" | "prev" | "previous", None) => QuizCommand::Previous,
        ("s" | "submit", None) => QuizCommand::Submit,
        ("q" | "quit", None) => QuizCommand::Quit,
        ("t" | "true", None) => QuizCommand::Answer(AnswerValue::Boolean(true)),
        ("f" | "false", None) => QuizCommand::Answer(AnswerValue::Boolean(false)),
        ("?" | "h" | "help", None) => return Ok(ParsedInput::Help),
        ("g" | "go" | "goto", Some(number)) => {
            let total = view.total;
            let index = number
                .parse::<usize>()
                .ok()
                .filter(|n| (1..=total).contains(n))
                .ok_or(InputError::BadQuestionNumber { total })?;
            QuizCommand::GoTo(index - 1)
        }
        _ => return Err(InputError::Unknown(input.to_string())),
    };

    Ok(ParsedInput::Command(command))
}

/// Parse the answer to the retry prompt. Anything other than a retry
/// request finishes the session.
pub fn parse_post_submit(input: &str) -> PostSubmitChoice {
    match input.trim().to_lowercase().as_str() {
        "r" | "retry" | "y" | "yes" => PostSubmitChoice::Retry,
        _ => PostSubmitChoice::Finish,
    }
}
