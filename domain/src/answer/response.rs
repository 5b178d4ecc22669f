//! Answered response value object

use crate::core::backend::BackendId;
use serde::{Deserialize, Serialize};

/// A successful answer from one backend (Value Object)
///
/// Produced once per successful backend call and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnsweredResponse {
    /// The backend that generated this answer
    pub source: BackendId,
    /// The generated text
    pub content: String,
}

impl AnsweredResponse {
    pub fn new(source: BackendId, content: impl Into<String>) -> Self {
        Self {
            source,
            content: content.into(),
        }
    }

    /// Get the answer text
    pub fn content(&self) -> &str {
        &self.content
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_response() {
        let r = AnsweredResponse::new(BackendId::Gemini, "B is correct");
        assert_eq!(r.source, BackendId::Gemini);
        assert_eq!(r.content(), "B is correct");
    }
}
