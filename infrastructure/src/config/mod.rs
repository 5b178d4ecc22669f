//! Configuration file loading for duet
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `DUET_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./duet.toml` or `./.duet.toml`
//! 4. Global: `$XDG_CONFIG_HOME/duet/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL, DEFAULT_GROQ_BASE_URL,
    DEFAULT_GROQ_MODEL, FileBackendsConfig, FileConfig, FileGeminiConfig, FileGroqConfig,
    FileOutputConfig, FileRetryConfig,
};
pub use loader::ConfigLoader;
