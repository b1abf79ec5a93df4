//! Output format value object

use serde::{Deserialize, Serialize};

/// Output format for quiz results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Score plus per-question feedback (default)
    #[default]
    Full,
    /// Score line only
    Summary,
    /// JSON output
    Json,
}
