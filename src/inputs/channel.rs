//! inputs::channel
//!
//! The line-oriented input source the prompter reads from.
//!
//! # Design
//!
//! Reads are async so the prompter can be written as one ordered loop, but
//! only one read is ever in flight: interleaved terminal reads would
//! corrupt terminal state. Masking is part of the request, so tests can
//! check that a masked descriptor asked for a silent read without
//! capturing terminal output.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

/// One line read request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadRequest {
    /// Prompt text, written before reading.
    pub prompt: String,
    /// Suppress echo of typed characters.
    pub masked: bool,
}

/// A source of answers to prompts.
#[async_trait]
pub trait InputChannel: Send {
    /// Show the prompt and read one line, without the line terminator.
    async fn read_line(&mut self, request: &ReadRequest) -> io::Result<String>;
}

/// Reads from the controlling terminal.
///
/// Masked requests go through `rpassword`; plain ones read a line from
/// stdin. Both run on tokio's blocking pool.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalInput;

impl TerminalInput {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl InputChannel for TerminalInput {
    async fn read_line(&mut self, request: &ReadRequest) -> io::Result<String> {
        let request = request.clone();
        tokio::task::spawn_blocking(move || read_terminal_line(&request))
            .await
            .map_err(io::Error::other)?
    }
}

fn read_terminal_line(request: &ReadRequest) -> io::Result<String> {
    if request.masked {
        return rpassword::prompt_password(&request.prompt);
    }

    let mut stdout = io::stdout();
    stdout.write_all(request.prompt.as_bytes())?;
    stdout.flush()?;

    let mut line = String::new();
    let read = io::stdin().lock().read_line(&mut line)?;
    if read == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input closed before an answer was entered",
        ));
    }
    Ok(strip_line_ending(line))
}

fn strip_line_ending(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}

/// Queued answers for tests and scripted runs.
///
/// Every request is recorded, and clones share state, so a test can keep a
/// handle after moving the channel into a prompter. Running out of answers
/// is an `UnexpectedEof` error.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    inner: Arc<Mutex<ScriptedInner>>,
}

#[derive(Debug, Default)]
struct ScriptedInner {
    answers: VecDeque<io::Result<String>>,
    requests: Vec<ReadRequest>,
}

impl ScriptedInput {
    /// Create a channel that answers with `answers` in order.
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let channel = Self::default();
        for answer in answers {
            channel.push(answer);
        }
        channel
    }

    pub fn push(&self, answer: impl Into<String>) {
        self.lock().answers.push_back(Ok(answer.into()));
    }

    /// Queue a read failure.
    pub fn push_error(&self, kind: io::ErrorKind, message: &str) {
        self.lock()
            .answers
            .push_back(Err(io::Error::new(kind, message.to_string())));
    }

    /// Requests issued so far, in order.
    pub fn requests(&self) -> Vec<ReadRequest> {
        self.lock().requests.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, ScriptedInner> {
        // A poisoned lock only means another test thread panicked.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl InputChannel for ScriptedInput {
    async fn read_line(&mut self, request: &ReadRequest) -> io::Result<String> {
        let mut inner = self.lock();
        inner.requests.push(request.clone());
        inner.answers.pop_front().unwrap_or_else(|| {
            Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "no scripted answer left",
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_line_ending_handles_crlf() {
        assert_eq!(strip_line_ending("abc\r\n".into()), "abc");
        assert_eq!(strip_line_ending("abc\n".into()), "abc");
        assert_eq!(strip_line_ending("abc".into()), "abc");
        assert_eq!(strip_line_ending(" a b \n".into()), " a b ");
    }

    #[tokio::test]
    async fn scripted_answers_in_order_and_records_requests() {
        let mut channel = ScriptedInput::new(["one", "two"]);
        let handle = channel.clone();

        let req = ReadRequest {
            prompt: "Enter A  > ".into(),
            masked: true,
        };
        assert_eq!(channel.read_line(&req).await.unwrap(), "one");
        assert_eq!(channel.read_line(&req).await.unwrap(), "two");

        let err = channel.read_line(&req).await.unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
        assert_eq!(handle.requests().len(), 3);
        assert!(handle.requests()[0].masked);
    }

    #[tokio::test]
    async fn scripted_error_is_returned() {
        let mut channel = ScriptedInput::default();
        channel.push_error(io::ErrorKind::BrokenPipe, "gone");

        let req = ReadRequest {
            prompt: String::new(),
            masked: false,
        };
        let err = channel.read_line(&req).await.unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
