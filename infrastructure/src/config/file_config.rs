//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

use quiz_application::SessionParams;
use quiz_domain::{DomainError, OutputFormat, PassingThreshold, TimerPolicy};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

// Re-export OutputFormat from domain for convenience
pub use quiz_domain::OutputFormat as FileOutputFormat;

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("default_passing_score: {0}")]
    InvalidPassingScore(#[from] DomainError),

    #[error("{0} cannot be empty")]
    EmptyPath(&'static str),
}

/// Raw quiz configuration from TOML (`[quiz]` section)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileQuizConfig {
    /// Root directory holding `<course>/<quiz>.toml` files
    pub content_dir: String,
    /// Passing score used when a quiz file does not set one
    pub default_passing_score: u32,
    /// What happens when a timed quiz runs out of time
    pub timer_policy: TimerPolicy,
    /// Send submitted results to the result log
    pub submit_results: bool,
}

impl Default for FileQuizConfig {
    fn default() -> Self {
        Self {
            content_dir: "quizzes".to_string(),
            default_passing_score: PassingThreshold::DEFAULT_PERCENT as u32,
            timer_policy: TimerPolicy::default(),
            submit_results: true,
        }
    }
}

/// Raw output configuration from TOML (`[output]` section)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Output format (uses domain type)
    pub format: Option<OutputFormat>,
    /// Force colored output on or off; unset means color only on a terminal
    pub color: Option<bool>,
}

/// Raw logging configuration from TOML (`[logging]` section)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// JSONL file that submitted results are appended to
    pub results_file: Option<String>,
    /// File that diagnostic logs are written to, in addition to stderr
    pub log_file: Option<String>,
}

/// Complete configuration file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Quiz settings
    pub quiz: FileQuizConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Logging settings
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        PassingThreshold::new(self.quiz.default_passing_score)?;

        if self.quiz.content_dir.trim().is_empty() {
            return Err(ConfigValidationError::EmptyPath("quiz.content_dir"));
        }
        if self
            .logging
            .results_file
            .as_deref()
            .is_some_and(|p| p.trim().is_empty())
        {
            return Err(ConfigValidationError::EmptyPath("logging.results_file"));
        }
        if self
            .logging
            .log_file
            .as_deref()
            .is_some_and(|p| p.trim().is_empty())
        {
            return Err(ConfigValidationError::EmptyPath("logging.log_file"));
        }

        Ok(())
    }

    /// Passing threshold applied to quiz files that do not set their own
    pub fn default_threshold(&self) -> Result<PassingThreshold, ConfigValidationError> {
        Ok(PassingThreshold::new(self.quiz.default_passing_score)?)
    }

    pub fn content_dir(&self) -> PathBuf {
        PathBuf::from(&self.quiz.content_dir)
    }

    /// Session behaviour derived from the `[quiz]` section
    pub fn session_params(&self) -> SessionParams {
        SessionParams::default()
            .with_timer_policy(self.quiz.timer_policy)
            .with_record_results(self.quiz.submit_results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[quiz]
content_dir = "/srv/lms/quizzes"
default_passing_score = 80
timer_policy = "auto_submit"
submit_results = false

[output]
format = "summary"
color = false

[logging]
results_file = "results.jsonl"
log_file = "lms-quiz.log"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.quiz.content_dir, "/srv/lms/quizzes");
        assert_eq!(config.quiz.default_passing_score, 80);
        assert_eq!(config.quiz.timer_policy, TimerPolicy::AutoSubmit);
        assert!(!config.quiz.submit_results);
        assert_eq!(config.output.format, Some(OutputFormat::Summary));
        assert_eq!(config.output.color, Some(false));
        assert_eq!(config.logging.results_file.as_deref(), Some("results.jsonl"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[quiz]
default_passing_score = 50
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.quiz.default_passing_score, 50);
        assert_eq!(config.quiz.content_dir, "quizzes");
        assert_eq!(config.quiz.timer_policy, TimerPolicy::Cosmetic);
        assert!(config.output.color.is_none());
        assert!(config.logging.results_file.is_none());
    }

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert_eq!(config.default_threshold().unwrap().percent(), 70);
        assert!(config.quiz.submit_results);
        assert!(config.output.format.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_passing_score_over_100() {
        let mut config = FileConfig::default();
        config.quiz.default_passing_score = 101;
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidPassingScore(_))
        ));
    }

    #[test]
    fn test_validate_empty_paths() {
        let mut config = FileConfig::default();
        config.quiz.content_dir = "  ".to_string();
        assert!(config.validate().is_err());

        let mut config = FileConfig::default();
        config.logging.results_file = Some(String::new());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_session_params() {
        let mut config = FileConfig::default();
        config.quiz.timer_policy = TimerPolicy::AutoSubmit;
        config.quiz.submit_results = false;

        let params = config.session_params();
        assert_eq!(params.timer_policy, TimerPolicy::AutoSubmit);
        assert!(!params.record_results);
    }
}
