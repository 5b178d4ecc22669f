//! Retry policy: attempt budget for a consensus run.

use duet_domain::DomainError;
use serde::{Deserialize, Serialize};

/// Default number of attempts per question
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// How many times both backends are queried before giving up.
///
/// Every attempt, successful or not, consumes one unit. There is no backoff:
/// attempts run back to back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryPolicy {
    max_retries: u32,
}

impl RetryPolicy {
    /// Create a policy, rejecting a zero budget
    pub fn new(max_retries: u32) -> Result<Self, DomainError> {
        if max_retries == 0 {
            return Err(DomainError::InvalidRetryBudget(max_retries));
        }
        Ok(Self { max_retries })
    }

    /// Maximum number of attempts
    pub fn max_retries(&self) -> u32 {
        self.max_retries
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }
}
