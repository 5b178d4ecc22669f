//! Interactive question loop
//!
//! Each turn reads lines until end-of-input, then runs the consensus use
//! case on the accumulated text. A line consisting of `exit` ends the
//! session at once. An empty turn goes back to the prompt; two empty turns
//! in a row end the session.

use crate::output::ConsoleFormatter;
use duet_application::{
    ConsensusProgressNotifier, NoProgress, RetryPolicy, RunConsensusError, RunConsensusInput,
    RunConsensusUseCase,
};
use duet_domain::Question;
use std::borrow::Cow;
use std::io::{self, Write};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Why the session stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user typed `exit`
    ExitRequested,
    /// Input closed twice in a row with nothing typed
    EndOfInput,
    /// The shared cancellation token fired
    Cancelled,
}

/// Outcome of reading one turn of input
enum Turn {
    Question(Question),
    Blank,
    Exit,
    Closed,
    Cancelled,
}

/// Interactive session over any line source and output sink
pub struct InteractiveSession<R, W> {
    use_case: RunConsensusUseCase,
    policy: RetryPolicy,
    progress: Box<dyn ConsensusProgressNotifier>,
    cancellation_token: CancellationToken,
    input: R,
    output: W,
}

impl<R, W> InteractiveSession<R, W>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    pub fn new(use_case: RunConsensusUseCase, policy: RetryPolicy, input: R, output: W) -> Self {
        Self {
            use_case,
            policy,
            progress: Box::new(NoProgress),
            cancellation_token: CancellationToken::new(),
            input,
            output,
        }
    }

    /// Set the progress notifier used while a question is processed
    pub fn with_progress(mut self, progress: Box<dyn ConsensusProgressNotifier>) -> Self {
        self.progress = progress;
        self
    }

    /// Stop reading and processing when `token` fires
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation_token = token;
        self
    }

    /// Run until `exit`, closed input, or cancellation.
    pub async fn run(mut self) -> io::Result<SessionEnd> {
        info!(
            "Session started (max {} attempts per question)",
            self.policy.max_retries()
        );
        self.write(&ConsoleFormatter::banner())?;
        let mut closed_turns = 0;

        loop {
            self.write(&ConsoleFormatter::prompt())?;

            let turn = self.read_turn().await?;
            closed_turns = match turn {
                Turn::Closed => closed_turns + 1,
                _ => 0,
            };

            let question = match turn {
                Turn::Question(question) => question,
                Turn::Blank => {
                    debug!("Ignoring blank question");
                    continue;
                }
                Turn::Closed if closed_turns < 2 => {
                    debug!("Empty input, prompting again");
                    continue;
                }
                Turn::Closed => {
                    self.write_line(ConsoleFormatter::goodbye())?;
                    return Ok(SessionEnd::EndOfInput);
                }
                Turn::Exit => {
                    self.write_line(ConsoleFormatter::goodbye())?;
                    return Ok(SessionEnd::ExitRequested);
                }
                Turn::Cancelled => return Ok(SessionEnd::Cancelled),
            };

            let input = RunConsensusInput::new(question, self.policy);
            match self
                .use_case
                .execute_with_progress(input, self.progress.as_ref())
                .await
            {
                Ok(outcome) => self.write(&ConsoleFormatter::format_outcome(&outcome))?,
                Err(RunConsensusError::Cancelled) => return Ok(SessionEnd::Cancelled),
            }
        }
    }

    /// Accumulate lines until end-of-input or `exit`.
    ///
    /// Invalid UTF-8 is replaced with U+FFFD.
    async fn read_turn(&mut self) -> io::Result<Turn> {
        let mut buffer = String::new();
        let mut bytes_read = 0;

        loop {
            let mut raw = Vec::new();
            let n = tokio::select! {
                biased;
                _ = self.cancellation_token.cancelled() => return Ok(Turn::Cancelled),
                read = self.input.read_until(b'\n', &mut raw) => read?,
            };

            if n == 0 {
                break;
            }
            let line = String::from_utf8_lossy(&raw);
            if matches!(line, Cow::Owned(_)) {
                warn!("Input contained invalid UTF-8; replaced undecodable bytes");
            }
            if line.trim().eq_ignore_ascii_case("exit") {
                return Ok(Turn::Exit);
            }

            bytes_read += n;
            buffer.push_str(&line);
        }

        if bytes_read == 0 {
            return Ok(Turn::Closed);
        }

        Ok(match Question::try_new(&buffer) {
            Some(question) => Turn::Question(question),
            None => Turn::Blank,
        })
    }

    fn write(&mut self, text: &str) -> io::Result<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()
    }

    fn write_line(&mut self, text: &str) -> io::Result<()> {
        self.write(&format!("{}\n", text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use duet_application::{AnswerBackend, BackendError};
    use duet_domain::BackendId;
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    /// Replies from a queue; repeats the last reply once the queue is drained
    struct QueueBackend {
        id: BackendId,
        replies: Mutex<VecDeque<Result<String, BackendError>>>,
        calls: Mutex<Vec<String>>,
    }

    impl QueueBackend {
        fn new(id: BackendId, replies: Vec<Result<&str, BackendError>>) -> Arc<Self> {
            Arc::new(Self {
                id,
                replies: Mutex::new(
                    replies
                        .into_iter()
                        .map(|r| r.map(str::to_string))
                        .collect(),
                ),
                calls: Mutex::new(Vec::new()),
            })
        }

        fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl AnswerBackend for QueueBackend {
        fn id(&self) -> BackendId {
            self.id
        }

        async fn generate(&self, prompt: &str) -> Result<String, BackendError> {
            self.calls.lock().unwrap().push(prompt.to_string());
            let mut replies = self.replies.lock().unwrap();
            if replies.len() > 1 {
                replies.pop_front().unwrap()
            } else {
                replies.front().cloned().unwrap()
            }
        }
    }

    fn session<'a>(
        primary: Arc<QueueBackend>,
        secondary: Arc<QueueBackend>,
        max_retries: u32,
        input: &'static [u8],
        output: &'a mut Vec<u8>,
    ) -> InteractiveSession<&'static [u8], &'a mut Vec<u8>> {
        colored::control::set_override(false);
        let use_case = RunConsensusUseCase::new(primary, secondary);
        InteractiveSession::new(
            use_case,
            RetryPolicy::new(max_retries).unwrap(),
            input,
            output,
        )
    }

    #[tokio::test]
    async fn test_agreed_answer_printed_then_goodbye_on_eof() {
        let gemini = QueueBackend::new(BackendId::Gemini, vec![Ok("B is correct"), Ok("true")]);
        let groq = QueueBackend::new(BackendId::Groq, vec![Ok("B) 4 is correct")]);
        let mut out = Vec::new();

        let end = session(gemini.clone(), groq.clone(), 1, b"2+2=? A) 3 B) 4\n", &mut out)
            .run()
            .await
            .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(end, SessionEnd::EndOfInput);
        assert!(text.starts_with("Interactive AI Question Answering System"));
        assert!(text.contains("Enter your question:"));
        assert!(text.contains("Response:\nB is correct\n"));
        assert!(text.ends_with("Goodbye!\n"));
        assert_eq!(gemini.call_count(), 2);
        assert_eq!(groq.call_count(), 1);
        assert!(gemini.calls.lock().unwrap()[0].contains("2+2=? A) 3 B) 4"));
    }

    #[tokio::test]
    async fn test_multi_line_question_is_sent_whole() {
        let gemini = QueueBackend::new(BackendId::Gemini, vec![Ok("B"), Ok("true")]);
        let groq = QueueBackend::new(BackendId::Groq, vec![Ok("B")]);
        let mut out = Vec::new();

        session(gemini.clone(), groq, 1, b"Which is prime?\nA) 4\nB) 5\n", &mut out)
            .run()
            .await
            .unwrap();

        let prompt = gemini.calls.lock().unwrap()[0].clone();
        assert!(prompt.contains("Which is prime?\nA) 4\nB) 5"));
    }

    #[tokio::test]
    async fn test_exit_ends_session_without_calls() {
        for input in [
            &b"exit\n"[..],
            &b"  EXIT  \n"[..],
            &b"half a question\nexit\nmore\n"[..],
        ] {
            let gemini = QueueBackend::new(BackendId::Gemini, vec![Ok("x")]);
            let groq = QueueBackend::new(BackendId::Groq, vec![Ok("y")]);
            let mut out = Vec::new();

            let end = session(gemini.clone(), groq.clone(), 3, input, &mut out)
                .run()
                .await
                .unwrap();

            assert_eq!(end, SessionEnd::ExitRequested);
            assert!(String::from_utf8(out).unwrap().ends_with("Goodbye!\n"));
            assert_eq!(gemini.call_count(), 0);
            assert_eq!(groq.call_count(), 0);
        }
    }

    #[tokio::test]
    async fn test_blank_question_discarded_silently() {
        let gemini = QueueBackend::new(BackendId::Gemini, vec![Ok("x")]);
        let groq = QueueBackend::new(BackendId::Groq, vec![Ok("y")]);
        let mut out = Vec::new();

        let end = session(gemini.clone(), groq, 3, b"   \n\n", &mut out)
            .run()
            .await
            .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(end, SessionEnd::EndOfInput);
        assert_eq!(text.matches("Enter your question:").count(), 3);
        assert!(!text.contains("Response"));
        assert_eq!(gemini.call_count(), 0);
    }

    #[tokio::test]
    async fn test_disagreement_shows_last_attempt_side_by_side() {
        let gemini = QueueBackend::new(
            BackendId::Gemini,
            vec![Ok("first A"), Ok("false"), Ok("Option A. Summary: A"), Ok("false")],
        );
        let groq = QueueBackend::new(BackendId::Groq, vec![Ok("first B"), Ok("second B")]);
        let mut out = Vec::new();

        session(gemini, groq, 2, b"q\n", &mut out).run().await.unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Responses after 2 attempts:"));
        assert!(text.contains("Gemini Response:\n\nOption A. \n\nSummary: A"));
        assert!(text.contains("Groq Response:\nsecond B"));
        assert!(!text.contains("first A"));
        assert!(!text.contains("first B"));
    }

    #[tokio::test]
    async fn test_backend_failure_reported_and_session_continues() {
        let gemini = QueueBackend::new(
            BackendId::Gemini,
            vec![Err(BackendError::Transport("down".to_string()))],
        );
        let groq = QueueBackend::new(BackendId::Groq, vec![Ok("y")]);
        let mut out = Vec::new();

        let end = session(gemini, groq.clone(), 1, b"q\n", &mut out)
            .run()
            .await
            .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(end, SessionEnd::EndOfInput);
        assert!(text.contains(
            "failed to get responses after 1 attempts. \
             Gemini error: Failed to send request: down, Groq error: none"
        ));
        assert!(text.ends_with("Goodbye!\n"));
        assert_eq!(groq.call_count(), 0);
    }

    #[tokio::test]
    async fn test_cancelled_token_stops_session() {
        let gemini = QueueBackend::new(BackendId::Gemini, vec![Ok("x")]);
        let groq = QueueBackend::new(BackendId::Groq, vec![Ok("y")]);
        let token = CancellationToken::new();
        token.cancel();
        let mut out = Vec::new();

        let end = session(gemini.clone(), groq, 3, b"q\n", &mut out)
            .with_cancellation(token)
            .run()
            .await
            .unwrap();

        assert_eq!(end, SessionEnd::Cancelled);
        assert!(!String::from_utf8(out).unwrap().contains("Goodbye!"));
        assert_eq!(gemini.call_count(), 0);
    }

    #[tokio::test]
    async fn test_invalid_utf8_question_is_still_asked() {
        let gemini = QueueBackend::new(BackendId::Gemini, vec![Ok("B"), Ok("true")]);
        let groq = QueueBackend::new(BackendId::Groq, vec![Ok("B")]);
        let mut out = Vec::new();

        let end = session(gemini.clone(), groq.clone(), 1, b"caf\xe9 question\n", &mut out)
            .run()
            .await
            .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(end, SessionEnd::EndOfInput);
        assert!(text.contains("Response:\nB\n"));
        assert_eq!(groq.call_count(), 1);
        assert!(gemini.calls.lock().unwrap()[0].contains("caf\u{FFFD} question"));
    }

    #[tokio::test]
    async fn test_single_empty_turn_returns_to_prompt() {
        let gemini = QueueBackend::new(BackendId::Gemini, vec![Ok("x")]);
        let groq = QueueBackend::new(BackendId::Groq, vec![Ok("y")]);
        let mut out = Vec::new();

        let end = session(gemini.clone(), groq, 3, b"", &mut out)
            .run()
            .await
            .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(end, SessionEnd::EndOfInput);
        assert_eq!(text.matches("Enter your question:").count(), 2);
        assert!(text.ends_with("Goodbye!\n"));
        assert_eq!(gemini.call_count(), 0);
    }
}
