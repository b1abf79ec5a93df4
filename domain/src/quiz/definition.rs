//! Quiz definition entity

use crate::core::error::DomainError;
use crate::core::session_ref::SessionRef;
use crate::question::entities::Question;
use crate::question::record::QuestionRecord;
use crate::question::set::QuestionSet;
use crate::scoring::threshold::PassingThreshold;
use std::time::Duration;

/// Everything fixed before a quiz session starts.
///
/// Constructing one is where configuration errors surface: an empty question
/// set, duplicate ids, or a question whose correctness field does not match
/// its kind all fail here, so a session can never start from bad content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizDefinition {
    session_ref: SessionRef,
    title: String,
    questions: QuestionSet,
    passing_threshold: PassingThreshold,
    time_limit: Option<Duration>,
}

impl QuizDefinition {
    pub fn new(
        session_ref: SessionRef,
        title: impl Into<String>,
        questions: Vec<Question>,
        passing_threshold: PassingThreshold,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            session_ref,
            title: title.into(),
            questions: QuestionSet::new(questions)?,
            passing_threshold,
            time_limit: None,
        })
    }

    /// Build a definition from raw records, validating each one.
    pub fn from_records(
        session_ref: SessionRef,
        title: impl Into<String>,
        records: Vec<QuestionRecord>,
        passing_threshold: PassingThreshold,
    ) -> Result<Self, DomainError> {
        let questions = records
            .into_iter()
            .map(Question::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(session_ref, title, questions, passing_threshold)
    }

    pub fn with_time_limit(mut self, limit: Duration) -> Result<Self, DomainError> {
        if limit.is_zero() {
            return Err(DomainError::ZeroTimeLimit);
        }
        self.time_limit = Some(limit);
        Ok(self)
    }

    pub fn session_ref(&self) -> &SessionRef {
        &self.session_ref
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn questions(&self) -> &QuestionSet {
        &self.questions
    }

    pub fn passing_threshold(&self) -> PassingThreshold {
        self.passing_threshold
    }

    pub fn time_limit(&self) -> Option<Duration> {
        self.time_limit
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }
}
