//! Answer map

use super::value::AnswerValue;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-session mapping from question id to the user's last selected value.
///
/// Holds at most one entry per question id. Entries are overwritten by new
/// selections and never removed; a retry starts from a fresh map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerMap {
    answers: BTreeMap<String, AnswerValue>,
}

impl AnswerMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store or overwrite the answer for `question_id`.
    ///
    /// Returns the previous value, if any.
    pub fn select(
        &mut self,
        question_id: impl Into<String>,
        value: AnswerValue,
    ) -> Option<AnswerValue> {
        self.answers.insert(question_id.into(), value)
    }

    pub fn get(&self, question_id: &str) -> Option<&AnswerValue> {
        self.answers.get(question_id)
    }

    pub fn is_answered(&self, question_id: &str) -> bool {
        self.answers.contains_key(question_id)
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AnswerValue)> {
        self.answers.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl FromIterator<(String, AnswerValue)> for AnswerMap {
    fn from_iter<T: IntoIterator<Item = (String, AnswerValue)>>(iter: T) -> Self {
        Self {
            answers: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_overwrites() {
        let mut answers = AnswerMap::new();
        assert!(answers.select("q1", AnswerValue::option("a")).is_none());
        let previous = answers.select("q1", AnswerValue::option("c"));

        assert_eq!(previous, Some(AnswerValue::option("a")));
        assert_eq!(answers.len(), 1);
        assert_eq!(answers.get("q1"), Some(&AnswerValue::option("c")));
    }

    #[test]
    fn test_unanswered_is_none() {
        let answers = AnswerMap::new();
        assert!(answers.get("q1").is_none());
        assert!(!answers.is_answered("q1"));
        assert!(answers.is_empty());
    }

    #[test]
    fn test_json_shape() {
        let answers: AnswerMap = serde_json::from_str(r#"{"q1": "b", "q2": true}"#).unwrap();
        assert_eq!(answers.get("q1"), Some(&AnswerValue::option("b")));
        assert_eq!(answers.get("q2"), Some(&AnswerValue::Boolean(true)));
    }
}
