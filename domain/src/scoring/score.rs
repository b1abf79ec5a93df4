//! Aggregate scoring

use super::predicate::is_correct;
use super::threshold::PassingThreshold;
use crate::answer::map::AnswerMap;
use crate::core::error::DomainError;
use crate::question::entities::Question;
use serde::{Deserialize, Serialize};

/// Aggregate outcome of a submitted quiz (Value Object)
///
/// # Example
///
/// ```
/// use quiz_domain::{PassingThreshold, ScoreResult};
///
/// let result = ScoreResult::from_counts(8, 10, PassingThreshold::default()).unwrap();
/// assert_eq!(result.score_percent, 80);
/// assert!(result.passed);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Rounded percentage of correct answers (0 to 100)
    pub score_percent: u8,
    /// Number of questions answered correctly
    pub correct_count: usize,
    /// Number of questions in the quiz
    pub total_questions: usize,
    /// Threshold the score was compared against
    pub passing_threshold: u8,
    /// Whether `score_percent >= passing_threshold`
    pub passed: bool,
}

impl ScoreResult {
    /// Build a result from raw counts.
    ///
    /// The percentage is `correct / total * 100` rounded half up, computed in
    /// integer arithmetic so 12.5% becomes 13%.
    pub fn from_counts(
        correct_count: usize,
        total_questions: usize,
        threshold: PassingThreshold,
    ) -> Result<Self, DomainError> {
        if total_questions == 0 {
            return Err(DomainError::EmptyQuestionSet);
        }
        let correct_count = correct_count.min(total_questions);

        let score_percent =
            ((200 * correct_count + total_questions) / (2 * total_questions)) as u8;

        Ok(Self {
            score_percent,
            correct_count,
            total_questions,
            passing_threshold: threshold.percent(),
            passed: threshold.is_met_by(score_percent),
        })
    }

    pub fn incorrect_count(&self) -> usize {
        self.total_questions - self.correct_count
    }

    /// Short display form, e.g. "8/10 (80%)"
    pub fn summary(&self) -> String {
        format!(
            "{}/{} ({}%)",
            self.correct_count, self.total_questions, self.score_percent
        )
    }
}

/// Score `answers` against `questions`.
///
/// Returns [`DomainError::EmptyQuestionSet`] rather than dividing by zero
/// when `questions` is empty.
pub fn score(
    questions: &[Question],
    answers: &AnswerMap,
    threshold: PassingThreshold,
) -> Result<ScoreResult, DomainError> {
    let correct_count = questions
        .iter()
        .filter(|q| is_correct(q, answers.get(q.id())))
        .count();

    ScoreResult::from_counts(correct_count, questions.len(), threshold)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answer::value::AnswerValue;

    /// Ten true/false questions whose correct answer is always `true`.
    fn ten_questions() -> Vec<Question> {
        (1..=10)
            .map(|i| {
                Question::true_false(format!("q{}", i), format!("Statement {}", i), true, "")
                    .unwrap()
            })
            .collect()
    }

    fn answers_with_correct(questions: &[Question], correct: usize) -> AnswerMap {
        questions
            .iter()
            .enumerate()
            .map(|(i, q)| (q.id().to_string(), AnswerValue::Boolean(i < correct)))
            .collect()
    }

    #[test]
    fn test_eight_of_ten_passes() {
        let questions = ten_questions();
        let answers = answers_with_correct(&questions, 8);
        let result = score(&questions, &answers, PassingThreshold::new(70).unwrap()).unwrap();

        assert_eq!(result.correct_count, 8);
        assert_eq!(result.score_percent, 80);
        assert!(result.passed);
    }

    #[test]
    fn test_six_of_ten_fails() {
        let questions = ten_questions();
        let answers = answers_with_correct(&questions, 6);
        let result = score(&questions, &answers, PassingThreshold::new(70).unwrap()).unwrap();

        assert_eq!(result.score_percent, 60);
        assert!(!result.passed);
    }

    #[test]
    fn test_empty_answer_map() {
        let questions = ten_questions();
        let result = score(&questions, &AnswerMap::new(), PassingThreshold::new(70).unwrap())
            .unwrap();
        assert_eq!(result.correct_count, 0);
        assert_eq!(result.score_percent, 0);
        assert!(!result.passed);

        let zero = score(&questions, &AnswerMap::new(), PassingThreshold::new(0).unwrap()).unwrap();
        assert!(zero.passed);
    }

    #[test]
    fn test_all_correct() {
        let questions = ten_questions();
        let answers = answers_with_correct(&questions, 10);
        let result = score(&questions, &answers, PassingThreshold::new(100).unwrap()).unwrap();
        assert_eq!(result.score_percent, 100);
        assert!(result.passed);
    }

    #[test]
    fn test_no_questions_is_an_error() {
        let err = score(&[], &AnswerMap::new(), PassingThreshold::default()).unwrap_err();
        assert_eq!(err, DomainError::EmptyQuestionSet);
    }

    #[test]
    fn test_round_half_up() {
        let t = PassingThreshold::default();
        assert_eq!(ScoreResult::from_counts(1, 8, t).unwrap().score_percent, 13); // 12.5
        assert_eq!(ScoreResult::from_counts(2, 3, t).unwrap().score_percent, 67); // 66.67
        assert_eq!(ScoreResult::from_counts(1, 3, t).unwrap().score_percent, 33); // 33.33
        assert_eq!(ScoreResult::from_counts(7, 8, t).unwrap().score_percent, 88); // 87.5
    }

    #[test]
    fn test_percent_matches_formula_for_every_count() {
        let questions = ten_questions();
        for correct in 0..=10 {
            let answers = answers_with_correct(&questions, correct);
            let result = score(&questions, &answers, PassingThreshold::default()).unwrap();
            let expected = (100.0 * correct as f64 / 10.0).round() as u8;
            assert_eq!(result.score_percent, expected);
        }
    }

    #[test]
    fn test_answers_for_unknown_questions_are_ignored() {
        let questions = ten_questions();
        let mut answers = answers_with_correct(&questions, 5);
        answers.select("q99", AnswerValue::Boolean(true));
        let result = score(&questions, &answers, PassingThreshold::default()).unwrap();
        assert_eq!(result.correct_count, 5);
    }

    #[test]
    fn test_summary() {
        let result = ScoreResult::from_counts(8, 10, PassingThreshold::default()).unwrap();
        assert_eq!(result.summary(), "8/10 (80%)");
        assert_eq!(result.incorrect_count(), 2);
    }
}
