//! CLI entrypoint for lms-quiz
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use colored::Colorize;
use quiz_application::{
    GradeAnswersError, GradeAnswersInput, GradeAnswersUseCase, LoadQuizError, NoProgress,
    NoResultSubmitter, QuestionSetSource, QuizProgressNotifier, QuizResultSubmitter,
    SessionParams, TakeQuizError, TakeQuizInput, TakeQuizUseCase, ValidateQuizUseCase,
};
use quiz_domain::{OutputFormat, SessionRef, TimerPolicy};
use quiz_infrastructure::{
    ConfigLoader, ConfigValidationError, FileConfig, JsonlResultLog, SampleCatalog,
    TomlQuestionSetSource, TracingResultSubmitter, load_answer_sheet,
};
use quiz_presentation::{
    Cli, Command, ConsoleFormatter, OutputFormatter, ProgressReporter, QuizArgs, SimpleProgress,
    TerminalQuizInteraction,
};
use std::io::IsTerminal;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

/// Exit status for broken quiz content or configuration
const CONFIGURATION_EXIT_CODE: i32 = 2;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match run(cli).await {
        Err(e) if is_configuration_error(&e) => {
            eprintln!("{} {:#}", "Configuration error:".red().bold(), e);
            eprintln!("Run `lms-quiz validate` to check the quiz content.");
            std::process::exit(CONFIGURATION_EXIT_CODE);
        }
        result => result,
    }
}

async fn run(cli: Cli) -> Result<()> {
    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    // Load configuration
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?
    };
    config.validate().context("Invalid configuration")?;

    // Keep the guard alive so buffered log lines are written on exit
    let _log_guard = init_logging(cli.verbose, config.logging.log_file.as_deref())?;

    if let Some(color) = color_override(config.output.color, std::io::stdout().is_terminal()) {
        colored::control::set_override(color);
    }

    info!("Starting lms-quiz");

    let format: OutputFormat = cli
        .output
        .map(Into::into)
        .or(config.output.format)
        .unwrap_or_default();

    // === Dependency Injection ===
    let source = build_source(&cli, &config)?;
    let submitter = build_submitter(&config);

    match cli.command.clone().unwrap_or(Command::List) {
        Command::Take {
            quiz,
            enforce_time_limit,
            no_submit,
        } => {
            let mut params = config.session_params();
            if enforce_time_limit {
                params = params.with_timer_policy(TimerPolicy::AutoSubmit);
            }
            if no_submit {
                params = params.with_record_results(false);
            }
            take(&cli, source, submitter, resolve_quiz(&quiz)?, params, format).await
        }
        Command::Grade {
            quiz,
            answers,
            no_submit,
        } => {
            let record = config.quiz.submit_results && !no_submit;
            grade(source, submitter, resolve_quiz(&quiz)?, answers, record, format).await
        }
        Command::Validate { quiz } => validate(source, &quiz).await,
        Command::List => list(source).await,
    }
}

/// Install the tracing subscriber: stderr filtered by verbosity, plus an
/// optional non-blocking file writer.
fn init_logging(verbose: u8, log_file: Option<&str>) -> Result<Option<WorkerGuard>> {
    // Initialize logging based on verbosity level
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(EnvFilter::new(level));

    let (file_layer, guard) = match log_file {
        Some(path) => {
            let path = PathBuf::from(path);
            let directory = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("."));
            let Some(file_name) = path.file_name() else {
                bail!("logging.log_file must name a file: {}", path.display());
            };
            std::fs::create_dir_all(&directory)
                .with_context(|| format!("Failed to create {}", directory.display()))?;

            let appender = tracing_appender::rolling::never(&directory, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_filter(EnvFilter::new(level));
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(file_layer)
        .init();

    Ok(guard)
}

/// Errors caused by quiz content or config rather than by the run itself
fn is_configuration_error(error: &anyhow::Error) -> bool {
    if let Some(e) = error.downcast_ref::<TakeQuizError>() {
        return e.is_configuration_error();
    }
    if let Some(e) = error.downcast_ref::<GradeAnswersError>() {
        return e.is_configuration_error();
    }
    if let Some(e) = error.downcast_ref::<LoadQuizError>() {
        return e.is_configuration_error();
    }
    error.downcast_ref::<ConfigValidationError>().is_some()
}

/// Explicit config wins; otherwise color is switched off when stdout is piped.
fn color_override(configured: Option<bool>, stdout_is_terminal: bool) -> Option<bool> {
    match configured {
        Some(color) => Some(color),
        None if !stdout_is_terminal => Some(false),
        None => None,
    }
}

#[derive(Debug, PartialEq, Eq)]
enum SourceKind {
    Sample,
    ContentDir,
}

/// `take` and `grade` without quiz ids run the sample quiz, so they read
/// from the sample catalog even without `--sample`.
fn source_kind(cli: &Cli) -> SourceKind {
    let names_no_quiz = |args: &QuizArgs| args.course.is_none() && args.quiz.is_none();
    let sample_default = match &cli.command {
        Some(Command::Take { quiz, .. }) | Some(Command::Grade { quiz, .. }) => {
            names_no_quiz(quiz)
        }
        _ => false,
    };

    if cli.sample || sample_default {
        SourceKind::Sample
    } else {
        SourceKind::ContentDir
    }
}

#[derive(Debug, PartialEq, Eq)]
enum ProgressMode {
    Hidden,
    Bar,
    Lines,
}

fn progress_mode(quiet: bool, stderr_is_terminal: bool) -> ProgressMode {
    if quiet {
        ProgressMode::Hidden
    } else if stderr_is_terminal {
        ProgressMode::Bar
    } else {
        ProgressMode::Lines
    }
}

fn build_source(cli: &Cli, config: &FileConfig) -> Result<Arc<dyn QuestionSetSource>> {
    if source_kind(cli) == SourceKind::Sample {
        info!("Using built-in sample catalog");
        return Ok(Arc::new(SampleCatalog::new()));
    }

    let root = cli
        .content_dir
        .clone()
        .unwrap_or_else(|| config.content_dir());
    info!("Loading quizzes from {}", root.display());

    Ok(Arc::new(
        TomlQuestionSetSource::new(root).with_default_threshold(config.default_threshold()?),
    ))
}

fn build_submitter(config: &FileConfig) -> Arc<dyn QuizResultSubmitter> {
    if !config.quiz.submit_results {
        return Arc::new(NoResultSubmitter);
    }

    if let Some(path) = config.logging.results_file.as_deref() {
        match JsonlResultLog::new(path) {
            Some(log) => return Arc::new(log),
            None => warn!("Falling back to log-only result submission"),
        }
    }

    Arc::new(TracingResultSubmitter)
}

/// Course and quiz ids from the command line, defaulting to the sample quiz.
fn resolve_quiz(args: &QuizArgs) -> Result<SessionRef> {
    match (&args.course, &args.quiz) {
        (Some(course), Some(quiz)) => Ok(SessionRef::new(course.clone(), quiz.clone())),
        (None, None) => Ok(SampleCatalog::default_quiz()),
        _ => bail!("Both <COURSE> and <QUIZ> are required"),
    }
}

async fn take(
    cli: &Cli,
    source: Arc<dyn QuestionSetSource>,
    submitter: Arc<dyn QuizResultSubmitter>,
    session_ref: SessionRef,
    params: SessionParams,
    format: OutputFormat,
) -> Result<()> {
    let use_case = TakeQuizUseCase::new(source, submitter);
    let interaction = TerminalQuizInteraction::new(format);
    let input = TakeQuizInput::new(session_ref).with_params(params);

    let progress: Box<dyn QuizProgressNotifier> =
        match progress_mode(cli.quiet, std::io::stderr().is_terminal()) {
            ProgressMode::Hidden => Box::new(NoProgress),
            ProgressMode::Bar => Box::new(ProgressReporter::new()),
            ProgressMode::Lines => Box::new(SimpleProgress),
        };

    let output = use_case
        .execute_with_progress(input, &interaction, progress.as_ref())
        .await?;

    if format != OutputFormat::Json {
        print!("{}", ConsoleFormatter::format_session_recap(&output));
    }

    Ok(())
}

async fn grade(
    source: Arc<dyn QuestionSetSource>,
    submitter: Arc<dyn QuizResultSubmitter>,
    session_ref: SessionRef,
    answers_path: PathBuf,
    record: bool,
    format: OutputFormat,
) -> Result<()> {
    let answers = load_answer_sheet(&answers_path).await?;

    let mut input = GradeAnswersInput::new(session_ref, answers);
    if !record {
        input = input.without_recording();
    }

    let output = GradeAnswersUseCase::new(source, submitter)
        .execute(input)
        .await?;

    println!("{}", ConsoleFormatter.render(&output.outcome, format));

    Ok(())
}

async fn validate(source: Arc<dyn QuestionSetSource>, args: &QuizArgs) -> Result<()> {
    let use_case = ValidateQuizUseCase::new(source);

    let results = match (&args.course, &args.quiz) {
        (Some(course), Some(quiz)) => {
            let session_ref = SessionRef::new(course.clone(), quiz.clone());
            let result = use_case.execute(&session_ref).await;
            vec![(session_ref, result)]
        }
        (None, None) => use_case.execute_all().await?,
        _ => bail!("Both <COURSE> and <QUIZ> are required"),
    };

    let mut invalid = 0;
    for (session_ref, result) in &results {
        match result {
            Ok(summary) => print!("{}", ConsoleFormatter::format_quiz_summary(summary)),
            Err(e) => {
                invalid += 1;
                print!("{}", ConsoleFormatter::format_invalid_quiz(session_ref, e));
            }
        }
    }

    if invalid > 0 {
        bail!("{} of {} quizzes failed validation", invalid, results.len());
    }
    Ok(())
}

async fn list(source: Arc<dyn QuestionSetSource>) -> Result<()> {
    let quizzes = source.list_quizzes().await?;
    print!("{}", ConsoleFormatter::format_quiz_list(&quizzes));
    Ok(())
}
