//! Configuration file loading for lms-quiz
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `LMS_QUIZ_*` environment variables (e.g. `LMS_QUIZ_QUIZ__TIMER_POLICY`)
//! 2. `--config <path>` specified file
//! 3. Project root: `./lms-quiz.toml` or `./.lms-quiz.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/lms-quiz/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileLoggingConfig, FileOutputConfig, FileOutputFormat,
    FileQuizConfig,
};
pub use loader::ConfigLoader;
