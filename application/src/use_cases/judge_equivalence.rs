//! Equivalence judge.
//!
//! Asks a backend whether two answers convey the same meaning. The reply is
//! interpreted with [`Verdict::parse`]: only a bare `true` counts as
//! agreement, any other text is a disagreement rather than an error.

use crate::ports::answer_backend::{AnswerBackend, BackendError};
use duet_domain::util::truncate_str;
use duet_domain::{PromptTemplate, Verdict};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while judging equivalence
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum JudgeError {
    #[error("Failed to compare responses: {0}")]
    Comparison(#[source] BackendError),
}

/// Compares two answers through a backend's raw generation path.
#[derive(Clone)]
pub struct EquivalenceJudge {
    backend: Arc<dyn AnswerBackend>,
}

impl EquivalenceJudge {
    pub fn new(backend: Arc<dyn AnswerBackend>) -> Self {
        Self { backend }
    }

    /// Ask the backend for a verdict on two answers.
    pub async fn verdict(&self, first: &str, second: &str) -> Result<Verdict, JudgeError> {
        let prompt = PromptTemplate::comparison(first, second);
        let raw = self
            .backend
            .generate(&prompt)
            .await
            .map_err(JudgeError::Comparison)?;

        let verdict = Verdict::parse(&raw);
        debug!(
            "{} judged answers {}: {:?}",
            self.backend.id(),
            verdict,
            truncate_str(raw.trim(), 80)
        );
        Ok(verdict)
    }

    /// `true` iff the backend answered with a bare `true`.
    pub async fn judge(&self, first: &str, second: &str) -> Result<bool, JudgeError> {
        Ok(self.verdict(first, second).await?.is_equivalent())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use duet_domain::BackendId;
    use std::sync::Mutex;

    /// Backend that always replies with the same text and records prompts
    struct FixedReply {
        reply: Result<String, BackendError>,
        prompts: Mutex<Vec<String>>,
    }

    impl FixedReply {
        fn ok(reply: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: Ok(reply.to_string()),
                prompts: Mutex::new(Vec::new()),
            })
        }

        fn err(error: BackendError) -> Arc<Self> {
            Arc::new(Self {
                reply: Err(error),
                prompts: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl AnswerBackend for FixedReply {
        fn id(&self) -> BackendId {
            BackendId::Gemini
        }

        async fn generate(&self, prompt: &str) -> Result<String, BackendError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            self.reply.clone()
        }
    }

    async fn judge_with(reply: &str) -> bool {
        EquivalenceJudge::new(FixedReply::ok(reply))
            .judge("B is correct", "B) 4 is correct")
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_literal_true_is_equivalent() {
        assert!(judge_with("true").await);
        assert!(judge_with("TRUE").await);
        assert!(judge_with("  True  \n").await);
    }

    #[tokio::test]
    async fn test_non_literal_replies_are_not_equivalent() {
        assert!(!judge_with("True.").await);
        assert!(!judge_with("no").await);
        assert!(!judge_with("").await);
        assert!(!judge_with("false").await);
        assert!(!judge_with("Yes, they are semantically equivalent.").await);
    }

    #[tokio::test]
    async fn test_prompt_embeds_both_answers_verbatim() {
        let backend = FixedReply::ok("true");
        let judge = EquivalenceJudge::new(backend.clone());

        judge.judge("answer one", "answer two").await.unwrap();

        let prompts = backend.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert_eq!(prompts[0], PromptTemplate::comparison("answer one", "answer two"));
        // The raw generation path is used: no multiple-choice decoration
        assert!(!prompts[0].contains("Here's the question"));
    }

    #[tokio::test]
    async fn test_backend_failure_is_comparison_error() {
        let judge = EquivalenceJudge::new(FixedReply::err(BackendError::Generation(
            "quota exceeded".to_string(),
        )));

        let err = judge.judge("a", "b").await.unwrap_err();

        assert_eq!(
            err,
            JudgeError::Comparison(BackendError::Generation("quota exceeded".to_string()))
        );
        assert_eq!(
            err.to_string(),
            "Failed to compare responses: Failed to generate response: quota exceeded"
        );
    }
}
