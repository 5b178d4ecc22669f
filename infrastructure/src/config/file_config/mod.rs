//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.

mod backends;
mod output;
mod retry;

pub use backends::{
    DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL, DEFAULT_GROQ_BASE_URL, DEFAULT_GROQ_MODEL,
    FileBackendsConfig, FileGeminiConfig, FileGroqConfig,
};
pub use output::FileOutputConfig;
pub use retry::FileRetryConfig;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A problem found in an otherwise well-formed configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("{field}: value cannot be empty")]
    EmptyValue { field: String },

    #[error("retry.max_retries: must be at least 1 (got {value})")]
    InvalidMaxRetries { value: u32 },
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Attempt budget
    pub retry: FileRetryConfig,
    /// Backend endpoints, models and credential variables
    pub backends: FileBackendsConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut issues = Vec::new();

        if self.retry.max_retries == 0 {
            issues.push(ConfigValidationError::InvalidMaxRetries {
                value: self.retry.max_retries,
            });
        }

        issues.extend(self.backends.validate());

        issues
    }
}
