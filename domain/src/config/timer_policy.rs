//! Timer policy value object

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// What happens when a timed quiz runs out of time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimerPolicy {
    /// The countdown is display-only; the session stays open past zero (default)
    #[default]
    Cosmetic,
    /// The session is submitted as soon as input arrives after the limit
    AutoSubmit,
}

impl TimerPolicy {
    pub fn enforces_limit(&self) -> bool {
        matches!(self, TimerPolicy::AutoSubmit)
    }
}

impl FromStr for TimerPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "cosmetic" | "display" => Ok(TimerPolicy::Cosmetic),
            "auto_submit" | "enforce" => Ok(TimerPolicy::AutoSubmit),
            _ => Err(format!("Unknown timer policy: {}", s)),
        }
    }
}

impl std::fmt::Display for TimerPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimerPolicy::Cosmetic => write!(f, "cosmetic"),
            TimerPolicy::AutoSubmit => write!(f, "auto_submit"),
        }
    }
}
