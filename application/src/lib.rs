//! Application layer for duet
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{DEFAULT_MAX_RETRIES, RetryPolicy};
pub use ports::{
    answer_backend::{AnswerBackend, BackendError},
    progress::{ConsensusProgressNotifier, NoProgress},
};
pub use use_cases::judge_equivalence::{EquivalenceJudge, JudgeError};
pub use use_cases::run_consensus::{
    ConsensusOutcome, RunConsensusError, RunConsensusInput, RunConsensusUseCase,
};
