//! Session reference value object

use serde::{Deserialize, Serialize};

/// Identifies which quiz a session belongs to (course id + quiz id).
///
/// Only used for routing, display and result submission. Scoring never
/// looks at it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionRef {
    pub course_id: String,
    pub quiz_id: String,
}

impl SessionRef {
    pub fn new(course_id: impl Into<String>, quiz_id: impl Into<String>) -> Self {
        Self {
            course_id: course_id.into(),
            quiz_id: quiz_id.into(),
        }
    }
}

impl std::fmt::Display for SessionRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.course_id, self.quiz_id)
    }
}
