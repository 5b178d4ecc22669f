//! Infrastructure layer for duet
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, plus configuration and credential loading.

pub mod config;
pub mod credentials;
pub mod providers;

// Re-export commonly used types
pub use config::{ConfigLoader, ConfigValidationError, FileConfig};
pub use credentials::{ApiKey, CredentialError, Credentials, load_dotenv};
pub use providers::{
    BackendPair, create_backends, gemini::GeminiBackend, groq::GroqBackend,
};
