//! Gemini backend adapter
//!
//! Implements `AnswerBackend` over the Generative Language REST API.
//! Every failure surfaces as `BackendError::Generation`.

use super::types::{GenerateContentRequest, GenerateContentResponse};
use async_trait::async_trait;
use duet_application::{AnswerBackend, BackendError};
use duet_domain::BackendId;
use duet_domain::util::log_preview;
use reqwest::header::{HeaderMap, HeaderValue};
use tracing::debug;

const API_KEY_HEADER: &str = "x-goog-api-key";

pub struct GeminiBackend {
    client: reqwest::Client,
    endpoint: String,
    model: String,
}

impl GeminiBackend {
    /// Create a new Gemini backend.
    ///
    /// The key is attached to every request as a default header.
    pub fn new(api_key: &str, model: &str, base_url: &str) -> Result<Self, BackendError> {
        if api_key.trim().is_empty() {
            return Err(BackendError::ClientInit("Gemini API key is empty".to_string()));
        }

        let mut key = HeaderValue::from_str(api_key)
            .map_err(|e| BackendError::ClientInit(format!("invalid API key: {}", e)))?;
        key.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(API_KEY_HEADER, key);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| BackendError::ClientInit(e.to_string()))?;

        let endpoint = format!(
            "{}/v1beta/models/{}:generateContent",
            base_url.trim_end_matches('/'),
            model
        );

        Ok(Self {
            client,
            endpoint,
            model: model.to_string(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl AnswerBackend for GeminiBackend {
    fn id(&self) -> BackendId {
        BackendId::Gemini
    }

    async fn generate(&self, prompt: &str) -> Result<String, BackendError> {
        debug!(model = %self.model, "POST {}", self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .json(&GenerateContentRequest::user_text(prompt))
            .send()
            .await
            .map_err(|e| BackendError::Generation(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            debug!("Gemini error body: {}", log_preview(&body, 200));
            return Err(BackendError::Generation(format!(
                "API returned status {}",
                status.as_u16()
            )));
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| BackendError::Generation(e.to_string()))?;

        let text = body
            .first_text()
            .ok_or_else(|| BackendError::Generation("no content in response".to_string()))?;

        debug!("Gemini replied: {}", log_preview(&text, 120));
        Ok(text)
    }
}
