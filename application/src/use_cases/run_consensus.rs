//! Run Consensus use case
//!
//! Asks both backends the same question, has the primary backend judge
//! whether the answers agree, and repeats the whole attempt until they do or
//! the retry budget is spent.
//!
//! # Attempt flow
//!
//! ```text
//! Attempting(n) ─┬─ primary fails ───────────────┐
//!                ├─ secondary fails ─────────────┤
//!                ├─ judge fails ─────────────────┤──> Attempting(n+1)
//!                ├─ verdict: different ──────────┘        │
//!                └─ verdict: equivalent ──> Agreed        │ n == max
//!                                                         v
//!                           ExhaustedWithAnswers | ExhaustedNoAnswers
//! ```
//!
//! Attempts run back to back with identical requests; generative backends
//! are expected to answer differently from one call to the next.

use crate::config::RetryPolicy;
use crate::ports::answer_backend::{AnswerBackend, BackendError};
use crate::ports::progress::{ConsensusProgressNotifier, NoProgress};
use crate::use_cases::judge_equivalence::EquivalenceJudge;
use crate::use_cases::shared::{check_cancelled, run_cancellable};
use duet_domain::util::truncate_str;
use duet_domain::{AnsweredResponse, Question, Verdict};
use std::sync::Arc;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

/// Errors that end a consensus run early.
///
/// Backend and judge failures never surface here: they consume an attempt
/// and end up in [`ConsensusOutcome::ExhaustedNoAnswers`] if nothing better
/// comes along.
#[derive(Error, Debug)]
pub enum RunConsensusError {
    #[error("Operation cancelled")]
    Cancelled,
}

impl RunConsensusError {
    /// Check if this error represents a cancellation
    pub fn is_cancelled(&self) -> bool {
        matches!(self, RunConsensusError::Cancelled)
    }
}

/// Input for the RunConsensus use case
#[derive(Debug, Clone)]
pub struct RunConsensusInput {
    /// The question to ask both backends
    pub question: Question,
    /// Attempt budget
    pub policy: RetryPolicy,
}

impl RunConsensusInput {
    pub fn new(question: Question, policy: RetryPolicy) -> Self {
        Self { question, policy }
    }
}

/// Terminal state of a consensus run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsensusOutcome {
    /// Both backends answered and the judge found the answers equivalent.
    /// `answer` is the primary backend's answer.
    Agreed {
        answer: AnsweredResponse,
        attempts: u32,
    },
    /// Budget spent; the last attempt produced both answers but they were
    /// never judged equivalent.
    ExhaustedWithAnswers {
        primary: AnsweredResponse,
        secondary: AnsweredResponse,
        attempts: u32,
    },
    /// Budget spent; the last attempt did not produce both answers.
    /// Each error is the most recent one recorded for that backend, `None`
    /// if it never failed (or was never reached).
    ExhaustedNoAnswers {
        primary_error: Option<BackendError>,
        secondary_error: Option<BackendError>,
        attempts: u32,
    },
}

impl ConsensusOutcome {
    /// Number of attempts executed
    pub fn attempts(&self) -> u32 {
        match self {
            ConsensusOutcome::Agreed { attempts, .. }
            | ConsensusOutcome::ExhaustedWithAnswers { attempts, .. }
            | ConsensusOutcome::ExhaustedNoAnswers { attempts, .. } => *attempts,
        }
    }

    /// Check if the backends agreed
    pub fn is_agreed(&self) -> bool {
        matches!(self, ConsensusOutcome::Agreed { .. })
    }

    /// The canonical answer, if the backends agreed
    pub fn canonical_answer(&self) -> Option<&str> {
        match self {
            ConsensusOutcome::Agreed { answer, .. } => Some(answer.content()),
            _ => None,
        }
    }
}

/// What a single attempt ended with, short of agreement
enum AttemptResult {
    Agreed(AnsweredResponse),
    Answered(AnsweredResponse, AnsweredResponse),
    Failed,
}

/// Use case for running the answer/compare/retry loop
pub struct RunConsensusUseCase {
    primary: Arc<dyn AnswerBackend>,
    secondary: Arc<dyn AnswerBackend>,
    judge: EquivalenceJudge,
    cancellation_token: Option<CancellationToken>,
}

impl RunConsensusUseCase {
    /// Create the use case. The primary backend also acts as the judge.
    pub fn new(primary: Arc<dyn AnswerBackend>, secondary: Arc<dyn AnswerBackend>) -> Self {
        let judge = EquivalenceJudge::new(Arc::clone(&primary));
        Self {
            primary,
            secondary,
            judge,
            cancellation_token: None,
        }
    }

    /// Use a different judge
    pub fn with_judge(mut self, judge: EquivalenceJudge) -> Self {
        self.judge = judge;
        self
    }

    /// Stop between and during attempts when `token` fires
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation_token = Some(token);
        self
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(
        &self,
        input: RunConsensusInput,
    ) -> Result<ConsensusOutcome, RunConsensusError> {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        input: RunConsensusInput,
        progress: &dyn ConsensusProgressNotifier,
    ) -> Result<ConsensusOutcome, RunConsensusError> {
        let max_attempts = input.policy.max_retries();
        info!(
            "Asking {} and {} (up to {} attempts): {}",
            self.primary.id(),
            self.secondary.id(),
            max_attempts,
            truncate_str(input.question.content(), 100)
        );

        let result = self.run_attempts(&input, progress).await;
        progress.on_finished();
        result
    }

    async fn run_attempts(
        &self,
        input: &RunConsensusInput,
        progress: &dyn ConsensusProgressNotifier,
    ) -> Result<ConsensusOutcome, RunConsensusError> {
        let max_attempts = input.policy.max_retries();
        let mut last_primary_error = None;
        let mut last_secondary_error = None;
        let mut last_answers = None;

        for attempt in 1..=max_attempts {
            check_cancelled(&self.cancellation_token)?;
            info!("Attempt {}/{}", attempt, max_attempts);
            progress.on_attempt_start(attempt, max_attempts);

            let result = self
                .run_attempt(
                    attempt,
                    max_attempts,
                    &input.question,
                    progress,
                    &mut last_primary_error,
                    &mut last_secondary_error,
                )
                .await?;

            match result {
                AttemptResult::Agreed(answer) => {
                    info!("Attempt {}/{}: responses agree", attempt, max_attempts);
                    return Ok(ConsensusOutcome::Agreed {
                        answer,
                        attempts: attempt,
                    });
                }
                AttemptResult::Answered(primary, secondary) => {
                    last_answers = Some((primary, secondary));
                }
                AttemptResult::Failed => {
                    last_answers = None;
                }
            }
        }

        let outcome = match last_answers {
            Some((primary, secondary)) => ConsensusOutcome::ExhaustedWithAnswers {
                primary,
                secondary,
                attempts: max_attempts,
            },
            None => ConsensusOutcome::ExhaustedNoAnswers {
                primary_error: last_primary_error,
                secondary_error: last_secondary_error,
                attempts: max_attempts,
            },
        };
        Ok(outcome)
    }

    /// One attempt: primary, then secondary, then the judge. Strictly sequential.
    async fn run_attempt(
        &self,
        attempt: u32,
        max_attempts: u32,
        question: &Question,
        progress: &dyn ConsensusProgressNotifier,
        last_primary_error: &mut Option<BackendError>,
        last_secondary_error: &mut Option<BackendError>,
    ) -> Result<AttemptResult, RunConsensusError> {
        let token = &self.cancellation_token;

        let primary = match run_cancellable(token, self.primary.fetch(question)).await? {
            Ok(answer) => {
                progress.on_backend_complete(self.primary.id(), true);
                answer
            }
            Err(e) => {
                warn!(
                    "Attempt {}/{}: {} API error: {}",
                    attempt,
                    max_attempts,
                    self.primary.id(),
                    e
                );
                progress.on_backend_complete(self.primary.id(), false);
                progress.on_attempt_failed(attempt, &e.to_string());
                *last_primary_error = Some(e);
                return Ok(AttemptResult::Failed);
            }
        };

        let secondary = match run_cancellable(token, self.secondary.fetch(question)).await? {
            Ok(answer) => {
                progress.on_backend_complete(self.secondary.id(), true);
                answer
            }
            Err(e) => {
                warn!(
                    "Attempt {}/{}: {} API error: {}",
                    attempt,
                    max_attempts,
                    self.secondary.id(),
                    e
                );
                progress.on_backend_complete(self.secondary.id(), false);
                progress.on_attempt_failed(attempt, &e.to_string());
                *last_secondary_error = Some(e);
                return Ok(AttemptResult::Failed);
            }
        };

        progress.on_judging();
        let verdict = run_cancellable(
            token,
            self.judge.verdict(primary.content(), secondary.content()),
        )
        .await?;

        match verdict {
            Ok(Verdict::Equivalent) => {
                progress.on_verdict(Verdict::Equivalent);
                Ok(AttemptResult::Agreed(primary))
            }
            Ok(Verdict::Different) => {
                info!(
                    "Attempt {}/{}: responses differ, retrying...",
                    attempt, max_attempts
                );
                progress.on_verdict(Verdict::Different);
                progress.on_attempt_failed(attempt, "responses differ");
                Ok(AttemptResult::Answered(primary, secondary))
            }
            Err(e) => {
                warn!("Attempt {}/{}: comparison error: {}", attempt, max_attempts, e);
                progress.on_attempt_failed(attempt, &e.to_string());
                Ok(AttemptResult::Answered(primary, secondary))
            }
        }
    }
}
