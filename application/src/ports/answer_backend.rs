//! Answer backend port
//!
//! Defines the single capability both text-generation backends expose.
//! The orchestrator and the equivalence judge depend only on this trait.

use async_trait::async_trait;
use duet_domain::{AnsweredResponse, BackendId, PromptTemplate, Question};
use thiserror::Error;

/// Errors that can occur while talking to a backend
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BackendError {
    #[error("Failed to create client: {0}")]
    ClientInit(String),

    #[error("Failed to generate response: {0}")]
    Generation(String),

    #[error("Failed to encode request: {0}")]
    Encoding(String),

    #[error("Failed to send request: {0}")]
    Transport(String),

    #[error("API request failed with status: {status}")]
    Status { status: u16 },

    #[error("Failed to decode response: {0}")]
    Decoding(String),

    #[error("No response choices returned")]
    EmptyChoices,
}

/// A remote text-generation service
///
/// Implementations (adapters) live in the infrastructure layer. Each call is
/// independent; no conversation state is kept between calls.
#[async_trait]
pub trait AnswerBackend: Send + Sync {
    /// Which backend this is
    fn id(&self) -> BackendId;

    /// Send a prompt verbatim and return the generated text
    async fn generate(&self, prompt: &str) -> Result<String, BackendError>;

    /// Answer a user question.
    ///
    /// The question is decorated with [`PromptTemplate::enhance`] before it is
    /// sent, so both backends see the same instructions.
    async fn fetch(&self, question: &Question) -> Result<AnsweredResponse, BackendError> {
        let prompt = PromptTemplate::enhance(question.content());
        let content = self.generate(&prompt).await?;
        Ok(AnsweredResponse::new(self.id(), content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct EchoBackend {
        prompts: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl AnswerBackend for EchoBackend {
        fn id(&self) -> BackendId {
            BackendId::Groq
        }

        async fn generate(&self, prompt: &str) -> Result<String, BackendError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            Ok("echo".to_string())
        }
    }

    #[tokio::test]
    async fn test_fetch_enhances_prompt_and_tags_source() {
        let backend = EchoBackend {
            prompts: Mutex::new(Vec::new()),
        };
        let question = Question::new("2+2=? A) 3 B) 4");

        let answer = backend.fetch(&question).await.unwrap();

        assert_eq!(answer, AnsweredResponse::new(BackendId::Groq, "echo"));
        let prompts = backend.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert_eq!(prompts[0], PromptTemplate::enhance("2+2=? A) 3 B) 4"));
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            BackendError::Status { status: 429 }.to_string(),
            "API request failed with status: 429"
        );
        assert_eq!(
            BackendError::EmptyChoices.to_string(),
            "No response choices returned"
        );
        assert_eq!(
            BackendError::Transport("connection refused".to_string()).to_string(),
            "Failed to send request: connection refused"
        );
    }
}
