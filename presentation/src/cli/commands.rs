//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for quiz results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Score, verdict and per-question feedback
    Full,
    /// Only the score line
    Summary,
    /// JSON output
    Json,
}

impl From<OutputFormat> for quiz_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Full => quiz_domain::OutputFormat::Full,
            OutputFormat::Summary => quiz_domain::OutputFormat::Summary,
            OutputFormat::Json => quiz_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for lms-quiz
#[derive(Parser, Debug)]
#[command(name = "lms-quiz")]
#[command(author, version, about = "Take, grade and check LMS course quizzes")]
#[command(long_about = r#"
lms-quiz runs course quizzes in the terminal and scores them.

Quizzes are TOML files at <content_dir>/<course>/<quiz>.toml. Use --sample
to work with the built-in web-dev-101 course instead.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./lms-quiz.toml     Project-level config
3. ~/.config/lms-quiz/config.toml   Global config

Example:
  lms-quiz --sample take
  lms-quiz take web-dev-101 html-basics
  lms-quiz grade web-dev-101 html-basics --answers answers.json -o json
  lms-quiz validate web-dev-101 html-basics
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Directory holding <course>/<quiz>.toml files (overrides config)
    #[arg(long, value_name = "DIR", global = true)]
    pub content_dir: Option<PathBuf>,

    /// Use the built-in sample course instead of the content directory
    #[arg(long, global = true)]
    pub sample: bool,
}

/// Quiz identifier arguments shared by the subcommands
#[derive(clap::Args, Debug, Clone)]
pub struct QuizArgs {
    /// Course id (defaults to the sample course)
    pub course: Option<String>,

    /// Quiz id within the course
    pub quiz: Option<String>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Take a quiz interactively
    Take {
        #[command(flatten)]
        quiz: QuizArgs,

        /// Submit automatically once the time limit has passed
        #[arg(long)]
        enforce_time_limit: bool,

        /// Do not record the submitted result
        #[arg(long)]
        no_submit: bool,
    },

    /// Score a JSON answer sheet without prompting
    Grade {
        #[command(flatten)]
        quiz: QuizArgs,

        /// JSON file mapping question ids to answers
        #[arg(short, long, value_name = "FILE")]
        answers: PathBuf,

        /// Do not record the submitted result
        #[arg(long)]
        no_submit: bool,
    },

    /// Check a quiz definition (all quizzes if none is named)
    Validate {
        #[command(flatten)]
        quiz: QuizArgs,
    },

    /// List available quizzes
    List,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_take_with_global_flags() {
        let cli = Cli::try_parse_from([
            "lms-quiz",
            "take",
            "web-dev-101",
            "html-basics",
            "-vv",
            "--quiet",
            "--enforce-time-limit",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        assert!(cli.quiet);
        match cli.command {
            Some(Command::Take {
                quiz,
                enforce_time_limit,
                no_submit,
            }) => {
                assert_eq!(quiz.course.as_deref(), Some("web-dev-101"));
                assert_eq!(quiz.quiz.as_deref(), Some("html-basics"));
                assert!(enforce_time_limit);
                assert!(!no_submit);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_grade_requires_answers() {
        assert!(Cli::try_parse_from(["lms-quiz", "grade", "c", "q"]).is_err());

        let cli = Cli::try_parse_from([
            "lms-quiz", "grade", "c", "q", "--answers", "a.json", "-o", "json",
        ])
        .unwrap();
        assert_eq!(cli.output, Some(OutputFormat::Json));
        assert!(matches!(cli.command, Some(Command::Grade { .. })));
    }

    #[test]
    fn test_sample_take_without_ids() {
        let cli = Cli::try_parse_from(["lms-quiz", "--sample", "take"]).unwrap();
        assert!(cli.sample);
        match cli.command {
            Some(Command::Take { quiz, .. }) => {
                assert!(quiz.course.is_none());
                assert!(quiz.quiz.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_output_format_maps_to_domain() {
        assert_eq!(
            quiz_domain::OutputFormat::from(OutputFormat::Summary),
            quiz_domain::OutputFormat::Summary
        );
    }
}
