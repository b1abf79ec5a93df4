//! Application layer for lms-quiz
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::SessionParams;
pub use ports::{
    interaction::{
        InteractionError, PostSubmitChoice, QuizCommand, QuizInteraction, ScriptedInteraction,
    },
    progress::{NoProgress, QuizProgressNotifier},
    question_source::{LoadQuizError, QuestionSetSource},
    result_submitter::{NoResultSubmitter, QuizResultSubmitter, SubmitResultError},
};
pub use use_cases::grade_answers::{
    GradeAnswersError, GradeAnswersInput, GradeAnswersOutput, GradeAnswersUseCase,
};
pub use use_cases::take_quiz::{
    AttemptRecord, TakeQuizError, TakeQuizInput, TakeQuizOutput, TakeQuizUseCase,
};
pub use use_cases::validate_quiz::{QuizSummary, ValidateQuizUseCase};
