//! Groq backend adapter
//!
//! Implements `AnswerBackend` over Groq's OpenAI-compatible chat
//! completions endpoint.

use super::types::{ChatCompletionRequest, ChatCompletionResponse};
use async_trait::async_trait;
use duet_application::{AnswerBackend, BackendError};
use duet_domain::BackendId;
use duet_domain::util::log_preview;
use reqwest::StatusCode;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use tracing::debug;

pub struct GroqBackend {
    client: reqwest::Client,
    api_key: String,
    endpoint: String,
    model: String,
}

impl GroqBackend {
    pub fn new(api_key: &str, model: &str, base_url: &str) -> Result<Self, BackendError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| BackendError::ClientInit(e.to_string()))?;

        Ok(Self {
            client,
            api_key: api_key.to_string(),
            endpoint: format!(
                "{}/openai/v1/chat/completions",
                base_url.trim_end_matches('/')
            ),
            model: model.to_string(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl AnswerBackend for GroqBackend {
    fn id(&self) -> BackendId {
        BackendId::Groq
    }

    async fn generate(&self, prompt: &str) -> Result<String, BackendError> {
        let body = serde_json::to_vec(&ChatCompletionRequest::user(&self.model, prompt))
            .map_err(|e| BackendError::Encoding(e.to_string()))?;

        debug!(model = %self.model, "POST {}", self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| BackendError::Transport(e.to_string()))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(BackendError::Status {
                status: status.as_u16(),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| BackendError::Transport(e.to_string()))?;
        let parsed: ChatCompletionResponse = serde_json::from_slice(&bytes)
            .map_err(|e| BackendError::Decoding(e.to_string()))?;

        let content = parsed.first_content().ok_or(BackendError::EmptyChoices)?;
        debug!("Groq replied: {}", log_preview(&content, 120));
        Ok(content)
    }
}
