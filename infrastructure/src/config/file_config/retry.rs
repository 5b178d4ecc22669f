//! Retry configuration from TOML (`[retry]` section)

use duet_application::{DEFAULT_MAX_RETRIES, RetryPolicy};
use serde::{Deserialize, Serialize};

/// Raw retry configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRetryConfig {
    /// Attempts per question before giving up
    pub max_retries: u32,
}

impl Default for FileRetryConfig {
    fn default() -> Self {
        Self {
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }
}

impl FileRetryConfig {
    /// Convert to the application policy
    pub fn to_policy(&self) -> Result<RetryPolicy, duet_domain::DomainError> {
        RetryPolicy::new(self.max_retries)
    }
}
