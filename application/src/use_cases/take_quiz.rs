//! Take Quiz use case
//!
//! Drives an interactive quiz session: loads the definition, feeds user
//! commands into a [`QuizSession`], submits, records the result and offers
//! retries.

use crate::config::SessionParams;
use crate::ports::interaction::{InteractionError, PostSubmitChoice, QuizCommand, QuizInteraction};
use crate::ports::progress::{NoProgress, QuizProgressNotifier};
use crate::ports::question_source::{LoadQuizError, QuestionSetSource};
use crate::ports::result_submitter::QuizResultSubmitter;
use crate::use_cases::shared::record_result;
use quiz_domain::{Countdown, DomainError, QuizOutcome, QuizSession, SessionRef};
use std::sync::Arc;
use thiserror::Error;
use tokio::time::Instant;
use tracing::{debug, info};

/// Errors that can occur while taking a quiz
#[derive(Error, Debug)]
pub enum TakeQuizError {
    #[error(transparent)]
    Load(#[from] LoadQuizError),

    #[error("Session error: {0}")]
    Session(#[from] DomainError),

    #[error("Interaction failed: {0}")]
    Interaction(#[from] InteractionError),
}

impl TakeQuizError {
    /// Whether the quiz content or setup is at fault rather than the run
    pub fn is_configuration_error(&self) -> bool {
        match self {
            TakeQuizError::Load(e) => e.is_configuration_error(),
            TakeQuizError::Session(e) => e.is_configuration_error(),
            TakeQuizError::Interaction(_) => false,
        }
    }
}

/// Input for the TakeQuiz use case
#[derive(Debug, Clone)]
pub struct TakeQuizInput {
    pub session_ref: SessionRef,
    pub params: SessionParams,
}

impl TakeQuizInput {
    pub fn new(session_ref: SessionRef) -> Self {
        Self {
            session_ref,
            params: SessionParams::default(),
        }
    }

    pub fn with_params(mut self, params: SessionParams) -> Self {
        self.params = params;
        self
    }
}

/// One submitted attempt
#[derive(Debug, Clone)]
pub struct AttemptRecord {
    pub outcome: QuizOutcome,
    /// Whether the result submitter accepted the result
    pub result_recorded: bool,
    /// Whether submission was forced by an enforced time limit
    pub timed_out: bool,
}

/// Output of the TakeQuiz use case
#[derive(Debug, Clone)]
pub struct TakeQuizOutput {
    pub session_ref: SessionRef,
    /// Submitted attempts, oldest first
    pub attempts: Vec<AttemptRecord>,
    /// True if the user quit an attempt without submitting it
    pub abandoned: bool,
}

impl TakeQuizOutput {
    pub fn last_outcome(&self) -> Option<&QuizOutcome> {
        self.attempts.last().map(|a| &a.outcome)
    }
}

/// How an attempt's command loop ended
enum AttemptEnd {
    Submitted { timed_out: bool },
    Quit,
}

/// Use case for taking a quiz interactively
pub struct TakeQuizUseCase<S, R>
where
    S: QuestionSetSource + ?Sized + 'static,
    R: QuizResultSubmitter + ?Sized + 'static,
{
    source: Arc<S>,
    submitter: Arc<R>,
}

impl<S, R> TakeQuizUseCase<S, R>
where
    S: QuestionSetSource + ?Sized + 'static,
    R: QuizResultSubmitter + ?Sized + 'static,
{
    pub fn new(source: Arc<S>, submitter: Arc<R>) -> Self {
        Self { source, submitter }
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(
        &self,
        input: TakeQuizInput,
        interaction: &dyn QuizInteraction,
    ) -> Result<TakeQuizOutput, TakeQuizError> {
        self.execute_with_progress(input, interaction, &NoProgress)
            .await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        input: TakeQuizInput,
        interaction: &dyn QuizInteraction,
        progress: &dyn QuizProgressNotifier,
    ) -> Result<TakeQuizOutput, TakeQuizError> {
        let definition = self.source.load_quiz(&input.session_ref).await?;
        info!(
            "Starting quiz {} ({} questions, pass at {})",
            definition.session_ref(),
            definition.total_questions(),
            definition.passing_threshold()
        );

        let mut session = QuizSession::new(definition);
        let mut attempts = Vec::new();

        loop {
            progress.on_attempt_start(session.definition(), session.attempt());

            let timed_out = match self
                .run_attempt(&mut session, &input.params, interaction, progress)
                .await?
            {
                AttemptEnd::Submitted { timed_out } => timed_out,
                AttemptEnd::Quit => {
                    info!(
                        "Attempt {} of {} abandoned",
                        session.attempt(),
                        session.session_ref()
                    );
                    return Ok(TakeQuizOutput {
                        session_ref: input.session_ref,
                        attempts,
                        abandoned: true,
                    });
                }
            };

            let outcome = session.submit()?.clone();
            info!(
                "Submitted {} attempt {}: {} ({})",
                outcome.session_ref,
                outcome.attempt,
                outcome.score.summary(),
                if outcome.passed() { "passed" } else { "failed" }
            );
            progress.on_submitted(&outcome);

            let result_recorded = record_result(
                self.submitter.as_ref(),
                &outcome,
                input.params.record_results,
            )
            .await;

            let choice = interaction.after_submit(&outcome).await?;
            attempts.push(AttemptRecord {
                outcome,
                result_recorded,
                timed_out,
            });

            match choice {
                PostSubmitChoice::Retry => {
                    session.retry();
                    debug!("Retrying, attempt {}", session.attempt());
                }
                PostSubmitChoice::Finish => break,
            }
        }

        Ok(TakeQuizOutput {
            session_ref: input.session_ref,
            attempts,
            abandoned: false,
        })
    }

    /// Feed commands into the session until the user submits or quits.
    async fn run_attempt(
        &self,
        session: &mut QuizSession,
        params: &SessionParams,
        interaction: &dyn QuizInteraction,
        progress: &dyn QuizProgressNotifier,
    ) -> Result<AttemptEnd, TakeQuizError> {
        let started = Instant::now();
        let countdown = session.definition().time_limit().map(Countdown::new);
        let enforce = params.timer_policy.enforces_limit();

        let expired = |started: Instant| {
            enforce && countdown.is_some_and(|c| c.is_expired(started.elapsed()))
        };

        loop {
            if expired(started) {
                progress.on_time_expired();
                return Ok(AttemptEnd::Submitted { timed_out: true });
            }

            let mut view = session.view();
            view.remaining = countdown.map(|c| c.remaining(started.elapsed()));

            let command = interaction.next_command(&view).await?;

            // Input that arrives after the limit is discarded when the limit is enforced.
            if expired(started) {
                info!("Time limit reached, submitting {}", session.session_ref());
                interaction.notify("Time is up, submitting your answers");
                progress.on_time_expired();
                return Ok(AttemptEnd::Submitted { timed_out: true });
            }

            match command {
                QuizCommand::Answer(value) => match session.select_current(value) {
                    Ok(_) => {
                        debug!("Answered {}", session.current_question().id());
                        progress.on_answer_recorded(
                            session.answered_count(),
                            session.total_questions(),
                        );
                    }
                    Err(e) => interaction.notify(&e.to_string()),
                },
                QuizCommand::Next => {
                    if !session.next()? {
                        interaction.notify("Already at the last question");
                    }
                }
                QuizCommand::Previous => {
                    if !session.previous()? {
                        interaction.notify("Already at the first question");
                    }
                }
                QuizCommand::GoTo(index) => {
                    if let Err(e) = session.go_to(index) {
                        interaction.notify(&e.to_string());
                    }
                }
                QuizCommand::Submit => return Ok(AttemptEnd::Submitted { timed_out: false }),
                QuizCommand::Quit => return Ok(AttemptEnd::Quit),
            }
        }
    }
}
