//! Quiz session entity

use super::outcome::QuizOutcome;
use super::view::QuestionView;
use crate::answer::map::AnswerMap;
use crate::answer::value::AnswerValue;
use crate::core::error::DomainError;
use crate::core::session_ref::SessionRef;
use crate::question::entities::Question;
use crate::quiz::definition::QuizDefinition;
use crate::scoring::feedback::build_feedback;
use crate::scoring::score::score;
use serde::{Deserialize, Serialize};

/// Lifecycle state of a [`QuizSession`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    /// Answers may be selected and the user may navigate
    InProgress,
    /// Outcome computed; only [`QuizSession::retry`] reopens the session
    Submitted,
}

/// One user's attempt at a quiz.
///
/// Holds the fixed definition, the answer map and the current question
/// pointer. Scoring and feedback are pure functions of the definition and
/// the final answers; the session only decides when they run.
///
/// # Example
///
/// ```
/// use quiz_domain::{
///     AnswerValue, PassingThreshold, Question, QuizDefinition, QuizSession, SessionRef,
/// };
///
/// let questions = vec![
///     Question::true_false("q1", "Rust has a garbage collector.", false, "It uses ownership.")
///         .unwrap(),
/// ];
/// let definition = QuizDefinition::new(
///     SessionRef::new("rust-101", "intro"),
///     "Intro",
///     questions,
///     PassingThreshold::default(),
/// )
/// .unwrap();
///
/// let mut session = QuizSession::new(definition);
/// session.select_answer("q1", AnswerValue::Boolean(false)).unwrap();
/// let outcome = session.submit().unwrap();
/// assert_eq!(outcome.score.score_percent, 100);
/// ```
#[derive(Debug, Clone)]
pub struct QuizSession {
    definition: QuizDefinition,
    answers: AnswerMap,
    current_index: usize,
    state: SessionState,
    attempt: u32,
    outcome: Option<QuizOutcome>,
}

impl QuizSession {
    pub fn new(definition: QuizDefinition) -> Self {
        Self {
            definition,
            answers: AnswerMap::new(),
            current_index: 0,
            state: SessionState::InProgress,
            attempt: 1,
            outcome: None,
        }
    }

    // ==================== Accessors ====================

    pub fn definition(&self) -> &QuizDefinition {
        &self.definition
    }

    pub fn session_ref(&self) -> &SessionRef {
        self.definition.session_ref()
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_submitted(&self) -> bool {
        self.state == SessionState::Submitted
    }

    /// One-based attempt number; incremented by [`QuizSession::retry`]
    pub fn attempt(&self) -> u32 {
        self.attempt
    }

    pub fn answers(&self) -> &AnswerMap {
        &self.answers
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn total_questions(&self) -> usize {
        self.definition.total_questions()
    }

    pub fn current_question(&self) -> &Question {
        // The question set is non-empty and current_index stays in range.
        &self.definition.questions().as_slice()[self.current_index]
    }

    pub fn answered_count(&self) -> usize {
        self.definition
            .questions()
            .iter()
            .filter(|q| self.answers.is_answered(q.id()))
            .count()
    }

    /// Ids of questions without an answer, in question order
    pub fn unanswered_ids(&self) -> Vec<&str> {
        self.definition
            .questions()
            .iter()
            .map(|q| q.id())
            .filter(|id| !self.answers.is_answered(id))
            .collect()
    }

    /// The outcome of the last submission, if the session is submitted
    pub fn outcome(&self) -> Option<&QuizOutcome> {
        self.outcome.as_ref()
    }

    pub fn view(&self) -> QuestionView {
        let question = self.current_question();
        QuestionView {
            index: self.current_index,
            total: self.total_questions(),
            question: question.clone(),
            current_answer: self.answers.get(question.id()).cloned(),
            answered_count: self.answered_count(),
            attempt: self.attempt,
            remaining: None,
        }
    }

    // ==================== Answer Collection ====================

    /// Store or overwrite the answer for `question_id`.
    ///
    /// The value must fit the question's kind: a boolean for true/false
    /// questions, one of the question's option ids otherwise.
    pub fn select_answer(
        &mut self,
        question_id: &str,
        value: AnswerValue,
    ) -> Result<Option<AnswerValue>, DomainError> {
        self.ensure_open()?;
        let question = self
            .definition
            .questions()
            .find(question_id)
            .ok_or_else(|| DomainError::UnknownQuestion(question_id.to_string()))?;
        question.check_answer(&value)?;
        Ok(self.answers.select(question_id, value))
    }

    /// Answer the question the session currently points at.
    pub fn select_current(&mut self, value: AnswerValue) -> Result<Option<AnswerValue>, DomainError> {
        let question_id = self.current_question().id().to_string();
        self.select_answer(&question_id, value)
    }

    pub fn current_answer(&self, question_id: &str) -> Option<&AnswerValue> {
        self.answers.get(question_id)
    }

    // ==================== Navigation ====================

    /// Move to the next question. Returns false when already at the last one.
    pub fn next(&mut self) -> Result<bool, DomainError> {
        self.ensure_open()?;
        if self.current_index + 1 < self.total_questions() {
            self.current_index += 1;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Move to the previous question. Returns false when already at the first one.
    pub fn previous(&mut self) -> Result<bool, DomainError> {
        self.ensure_open()?;
        if self.current_index > 0 {
            self.current_index -= 1;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Jump to the question at zero-based `index`.
    pub fn go_to(&mut self, index: usize) -> Result<(), DomainError> {
        self.ensure_open()?;
        let total = self.total_questions();
        if index >= total {
            return Err(DomainError::IndexOutOfRange { index, total });
        }
        self.current_index = index;
        Ok(())
    }

    // ==================== Submission ====================

    /// Score the session and build its feedback.
    ///
    /// The first call computes the outcome and closes the session; later
    /// calls return the same outcome without recomputing it.
    pub fn submit(&mut self) -> Result<&QuizOutcome, DomainError> {
        if self.outcome.is_none() {
            let questions = self.definition.questions().as_slice();
            let score = score(questions, &self.answers, self.definition.passing_threshold())?;
            let feedback = build_feedback(questions, &self.answers);

            self.outcome = Some(QuizOutcome {
                session_ref: self.definition.session_ref().clone(),
                title: self.definition.title().to_string(),
                attempt: self.attempt,
                score,
                feedback,
            });
            self.state = SessionState::Submitted;
        }

        self.outcome.as_ref().ok_or(DomainError::SessionClosed)
    }

    /// Start a fresh attempt: empty answers, first question, session reopened.
    pub fn retry(&mut self) {
        self.answers = AnswerMap::new();
        self.current_index = 0;
        self.state = SessionState::InProgress;
        self.outcome = None;
        self.attempt += 1;
    }

    fn ensure_open(&self) -> Result<(), DomainError> {
        match self.state {
            SessionState::InProgress => Ok(()),
            SessionState::Submitted => Err(DomainError::SessionClosed),
        }
    }
}
