//! Line input for the terminal front end
//!
//! On a terminal, lines come from a single `reedline` editor that lives on
//! its own thread for the whole session, so history carries over between
//! questions and the async runtime is never blocked. When stdin is piped,
//! lines are read from a buffered async reader instead.

use quiz_application::InteractionError;
use reedline::{DefaultPrompt, DefaultPromptSegment, Reedline, Signal};
use std::io::{IsTerminal, Write};
use std::sync::mpsc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::sync::{Mutex, oneshot};

type LineResult = Result<Option<String>, InteractionError>;

struct LineRequest {
    prompt: String,
    reply: oneshot::Sender<LineResult>,
}

enum Backend {
    Editor(mpsc::Sender<LineRequest>),
    Buffered(Mutex<Box<dyn AsyncBufRead + Unpin + Send>>),
}

/// Reads one line at a time. `None` means end of input (Ctrl-C, Ctrl-D or EOF).
pub struct LineReader {
    backend: Backend,
}

impl LineReader {
    /// Line editor when stdin is a terminal, buffered stdin otherwise.
    pub fn new() -> Self {
        if std::io::stdin().is_terminal() {
            Self::editor()
        } else {
            Self::from_reader(BufReader::new(tokio::io::stdin()))
        }
    }

    /// Start the editor thread. It exits once the reader is dropped.
    pub fn editor() -> Self {
        let (requests, incoming) = mpsc::channel::<LineRequest>();

        std::thread::spawn(move || {
            let mut editor = Reedline::create();
            for request in incoming {
                let prompt = DefaultPrompt::new(
                    DefaultPromptSegment::Basic(request.prompt),
                    DefaultPromptSegment::Empty,
                );
                let result = match editor.read_line(&prompt) {
                    Ok(Signal::Success(line)) => Ok(Some(line)),
                    Ok(_) => Ok(None),
                    Err(e) => Err(InteractionError::Io(e.to_string())),
                };
                let _ = request.reply.send(result);
            }
        });

        Self {
            backend: Backend::Editor(requests),
        }
    }

    /// Read from any buffered async source (piped stdin, or bytes in tests).
    pub fn from_reader(reader: impl AsyncBufRead + Unpin + Send + 'static) -> Self {
        Self {
            backend: Backend::Buffered(Mutex::new(Box::new(reader))),
        }
    }

    pub async fn read_line(&self, prompt: &str) -> LineResult {
        match &self.backend {
            Backend::Editor(requests) => {
                let (reply, response) = oneshot::channel();
                requests
                    .send(LineRequest {
                        prompt: prompt.to_string(),
                        reply,
                    })
                    .map_err(|_| InteractionError::Io("line editor stopped".to_string()))?;
                response
                    .await
                    .map_err(|_| InteractionError::Io("line editor stopped".to_string()))?
            }
            Backend::Buffered(reader) => {
                // Prompts go to stderr so stdout only carries results.
                eprint!("{}> ", prompt);
                let _ = std::io::stderr().flush();

                let mut line = String::new();
                let read = reader
                    .lock()
                    .await
                    .read_line(&mut line)
                    .await
                    .map_err(|e| InteractionError::Io(e.to_string()))?;
                if read == 0 {
                    return Ok(None);
                }
                Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
            }
        }
    }
}

impl Default for LineReader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_buffered_reads_lines_until_eof() {
        let reader = LineReader::from_reader(&b"b\r\n s \nq"[..]);

        assert_eq!(reader.read_line("answer").await.unwrap(), Some("b".to_string()));
        assert_eq!(reader.read_line("answer").await.unwrap(), Some(" s ".to_string()));
        assert_eq!(reader.read_line("answer").await.unwrap(), Some("q".to_string()));
        assert_eq!(reader.read_line("answer").await.unwrap(), None);
        assert_eq!(reader.read_line("answer").await.unwrap(), None);
    }
}
