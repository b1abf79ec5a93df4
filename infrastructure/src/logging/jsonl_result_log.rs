//! JSONL file writer for submitted quiz results.
//!
//! Each submission is serialized as a single JSON line with a `type` field
//! and `timestamp`, appended to the file via a buffered writer.

use async_trait::async_trait;
use quiz_application::{QuizResultSubmitter, SubmitResultError};
use quiz_domain::{ScoreResult, SessionRef};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{debug, warn};

const RECORD_TYPE: &str = "quiz_result";

/// Append-only JSONL result log.
///
/// Thread-safe via `Mutex<BufWriter<File>>`. Flushes after every record and
/// on `Drop`.
pub struct JsonlResultLog {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl JsonlResultLog {
    /// Open (or create) the log at the given path.
    ///
    /// Creates parent directories if they don't exist. Existing records are
    /// kept. Returns `None` if the file cannot be opened.
    pub fn new(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!(
                "Could not create result log directory {}: {}",
                parent.display(),
                e
            );
            return None;
        }

        let file = match OpenOptions::new().create(true).append(true).open(path) {
            Ok(f) => f,
            Err(e) => {
                warn!("Could not open result log {}: {}", path.display(), e);
                return None;
            }
        };

        Some(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
        })
    }

    /// Get the path to the log file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn record(session_ref: &SessionRef, result: &ScoreResult) -> serde_json::Value {
        let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);
        serde_json::json!({
            "type": RECORD_TYPE,
            "timestamp": timestamp,
            "course_id": session_ref.course_id,
            "quiz_id": session_ref.quiz_id,
            "score_percent": result.score_percent,
            "correct_count": result.correct_count,
            "total_questions": result.total_questions,
            "passing_threshold": result.passing_threshold,
            "passed": result.passed,
        })
    }
}

#[async_trait]
impl QuizResultSubmitter for JsonlResultLog {
    async fn submit_quiz_result(
        &self,
        session_ref: &SessionRef,
        result: &ScoreResult,
    ) -> Result<(), SubmitResultError> {
        let line = serde_json::to_string(&Self::record(session_ref, result))
            .map_err(|e| SubmitResultError::Io(e.to_string()))?;

        let mut writer = self
            .writer
            .lock()
            .map_err(|_| SubmitResultError::Unavailable("result log lock poisoned".to_string()))?;
        writeln!(writer, "{}", line).map_err(|e| SubmitResultError::Io(e.to_string()))?;
        writer
            .flush()
            .map_err(|e| SubmitResultError::Io(e.to_string()))?;

        debug!("Appended result for {} to {}", session_ref, self.path.display());
        Ok(())
    }
}

impl Drop for JsonlResultLog {
    fn drop(&mut self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(correct: usize, total: usize) -> ScoreResult {
        ScoreResult::from_counts(correct, total, quiz_domain::PassingThreshold::default()).unwrap()
    }

    fn read_lines(path: &Path) -> Vec<serde_json::Value> {
        std::fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[tokio::test]
    async fn test_writes_valid_jsonl() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.jsonl");
        let log = JsonlResultLog::new(&path).unwrap();
        let sref = SessionRef::new("web-dev-101", "html-basics");

        log.submit_quiz_result(&sref, &result(8, 10)).await.unwrap();
        log.submit_quiz_result(&sref, &result(5, 10)).await.unwrap();
        drop(log);

        let lines = read_lines(&path);
        assert_eq!(lines.len(), 2);
        for line in &lines {
            assert_eq!(line["type"], "quiz_result");
            assert!(line.get("timestamp").is_some());
            assert_eq!(line["course_id"], "web-dev-101");
            assert_eq!(line["quiz_id"], "html-basics");
        }
        assert_eq!(lines[0]["score_percent"], 80);
        assert_eq!(lines[0]["passed"], true);
        assert_eq!(lines[1]["score_percent"], 50);
        assert_eq!(lines[1]["passed"], false);
    }

    #[tokio::test]
    async fn test_appends_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("results.jsonl");
        let sref = SessionRef::new("web-dev-101", "html-basics");

        let log = JsonlResultLog::new(&path).unwrap();
        log.submit_quiz_result(&sref, &result(1, 1)).await.unwrap();
        drop(log);

        let log = JsonlResultLog::new(&path).unwrap();
        log.submit_quiz_result(&sref, &result(0, 1)).await.unwrap();
        drop(log);

        assert_eq!(read_lines(&path).len(), 2);
    }

    #[test]
    fn test_directory_path_returns_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(JsonlResultLog::new(dir.path()).is_none());
    }
}
