//! Backend identifier value object

use serde::{Deserialize, Serialize};

/// One of the two text-generation backends queried per question (Value Object)
///
/// `Gemini` is the primary backend: its answer is the canonical one when both
/// agree, and it also judges equivalence. `Groq` is the secondary backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendId {
    Gemini,
    Groq,
}

impl BackendId {
    /// Human-readable name shown to the user
    pub fn display_name(&self) -> &'static str {
        match self {
            BackendId::Gemini => "Gemini",
            BackendId::Groq => "Groq",
        }
    }

}

impl std::fmt::Display for BackendId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
