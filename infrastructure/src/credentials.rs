//! API key loading
//!
//! Keys come from the process environment, optionally seeded from a
//! `.env` file in the working directory. Both keys must be present
//! before any backend is constructed.

use crate::config::FileBackendsConfig;
use std::fmt;
use thiserror::Error;
use tracing::debug;

/// Errors raised while resolving credentials
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CredentialError {
    #[error("{var} environment variable is required")]
    Missing { var: String },
}

/// A non-empty API key. Never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wrap a key, rejecting blank values.
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            None
        } else {
            Some(Self(value))
        }
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}

impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<redacted>")
    }
}

/// Keys for both backends
#[derive(Debug, Clone)]
pub struct Credentials {
    pub gemini: ApiKey,
    pub groq: ApiKey,
}

impl Credentials {
    /// Read both keys from the process environment, using the variable
    /// names configured for each backend.
    pub fn from_env(backends: &FileBackendsConfig) -> Result<Self, CredentialError> {
        Self::from_lookup(backends, |var| std::env::var(var).ok())
    }

    /// Resolve both keys through `lookup`. The Gemini key is checked first.
    pub fn from_lookup<F>(backends: &FileBackendsConfig, lookup: F) -> Result<Self, CredentialError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let resolve = |var: &str| {
            lookup(var)
                .and_then(ApiKey::new)
                .ok_or_else(|| CredentialError::Missing {
                    var: var.to_string(),
                })
        };

        Ok(Self {
            gemini: resolve(&backends.gemini.api_key_env)?,
            groq: resolve(&backends.groq.api_key_env)?,
        })
    }
}

/// Load `.env` from the working directory into the environment.
///
/// Variables already set in the environment win. A missing file is not
/// an error.
pub fn load_dotenv() {
    match dotenvy::dotenv() {
        Ok(path) => debug!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => debug!("No .env file found"),
        Err(e) => tracing::warn!("Failed to read .env file: {}", e),
    }
}
