//! Backend configuration from TOML (`[backends]` section)

use super::ConfigValidationError;
use serde::{Deserialize, Serialize};

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_GROQ_MODEL: &str = "llama-3.3-70b-versatile";
pub const DEFAULT_GROQ_BASE_URL: &str = "https://api.groq.com";

/// Gemini (primary backend) settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGeminiConfig {
    /// Model passed to `generateContent`
    pub model: String,
    /// API root, without the `/v1beta/...` path
    pub base_url: String,
    /// Environment variable holding the API key
    pub api_key_env: String,
}

impl Default for FileGeminiConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_GEMINI_MODEL.to_string(),
            base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            api_key_env: "GEMINI_API_KEY".to_string(),
        }
    }
}

/// Groq (secondary backend) settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGroqConfig {
    /// Chat completions model
    pub model: String,
    /// API root, without the `/openai/v1/...` path
    pub base_url: String,
    /// Environment variable holding the API key
    pub api_key_env: String,
}

impl Default for FileGroqConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_GROQ_MODEL.to_string(),
            base_url: DEFAULT_GROQ_BASE_URL.to_string(),
            api_key_env: "GROQ_API_KEY".to_string(),
        }
    }
}

/// Both backends.
///
/// # Example
///
/// ```toml
/// [backends.gemini]
/// model = "gemini-2.0-flash"
///
/// [backends.groq]
/// model = "llama-3.3-70b-versatile"
/// api_key_env = "MY_GROQ_KEY"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileBackendsConfig {
    pub gemini: FileGeminiConfig,
    pub groq: FileGroqConfig,
}

impl FileBackendsConfig {
    pub(super) fn validate(&self) -> Vec<ConfigValidationError> {
        let fields = [
            ("backends.gemini.model", &self.gemini.model),
            ("backends.gemini.base_url", &self.gemini.base_url),
            ("backends.gemini.api_key_env", &self.gemini.api_key_env),
            ("backends.groq.model", &self.groq.model),
            ("backends.groq.base_url", &self.groq.base_url),
            ("backends.groq.api_key_env", &self.groq.api_key_env),
        ];

        fields
            .into_iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(field, _)| ConfigValidationError::EmptyValue {
                field: field.to_string(),
            })
            .collect()
    }
}
