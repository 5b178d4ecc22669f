//! Answer backend adapters
//!
//! Gemini is always the primary backend (it also judges equivalence),
//! Groq the secondary.

pub mod gemini;
pub mod groq;

use crate::config::FileBackendsConfig;
use crate::credentials::Credentials;
use duet_application::{AnswerBackend, BackendError};
use gemini::GeminiBackend;
use groq::GroqBackend;
use std::sync::Arc;
use tracing::info;

/// The two backends, ready to hand to the consensus use case
pub struct BackendPair {
    pub primary: Arc<dyn AnswerBackend>,
    pub secondary: Arc<dyn AnswerBackend>,
}

/// Build both adapters from configuration and resolved credentials.
pub fn create_backends(
    config: &FileBackendsConfig,
    credentials: &Credentials,
) -> Result<BackendPair, BackendError> {
    let gemini = GeminiBackend::new(
        credentials.gemini.expose(),
        &config.gemini.model,
        &config.gemini.base_url,
    )?;
    let groq = GroqBackend::new(
        credentials.groq.expose(),
        &config.groq.model,
        &config.groq.base_url,
    )?;

    info!(
        gemini_model = gemini.model(),
        groq_model = groq.model(),
        "Backends initialized"
    );

    Ok(BackendPair {
        primary: Arc::new(gemini),
        secondary: Arc::new(groq),
    })
}
