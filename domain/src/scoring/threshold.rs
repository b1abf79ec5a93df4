//! Passing threshold value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Minimum score percent (0..=100) needed to pass a quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct PassingThreshold(u8);

impl PassingThreshold {
    pub const DEFAULT_PERCENT: u8 = 70;

    pub fn new(percent: u32) -> Result<Self, DomainError> {
        if percent > 100 {
            return Err(DomainError::InvalidThreshold(percent));
        }
        Ok(Self(percent as u8))
    }

    pub fn percent(&self) -> u8 {
        self.0
    }

    pub fn is_met_by(&self, score_percent: u8) -> bool {
        score_percent >= self.0
    }
}

impl Default for PassingThreshold {
    fn default() -> Self {
        Self(Self::DEFAULT_PERCENT)
    }
}

impl TryFrom<u32> for PassingThreshold {
    type Error = DomainError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PassingThreshold> for u32 {
    fn from(value: PassingThreshold) -> Self {
        value.0 as u32
    }
}

impl std::fmt::Display for PassingThreshold {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.0)
    }
}
