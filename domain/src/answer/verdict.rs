//! Equivalence verdict parsing.
//!
//! The judge backend is asked to answer with the single word `true` or
//! `false`. Parsing is a strict literal match: only text that trims and
//! lowercases to exactly `true` counts as agreement. Anything else
//! ("True.", "yes", an explanation, an empty string) is a disagreement, never
//! an error. This means a verbose "yes, they are equivalent" is a false
//! negative and costs one more attempt.

use serde::{Deserialize, Serialize};

/// Outcome of comparing two answers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// The answers convey the same meaning
    Equivalent,
    /// The answers differ, or the judge did not answer with a bare `true`
    Different,
}

impl Verdict {
    /// Interpret raw judge output.
    ///
    /// ```
    /// use duet_domain::Verdict;
    ///
    /// assert_eq!(Verdict::parse(" TRUE \n"), Verdict::Equivalent);
    /// assert_eq!(Verdict::parse("True."), Verdict::Different);
    /// ```
    pub fn parse(response: &str) -> Self {
        if response.trim().to_lowercase() == "true" {
            Verdict::Equivalent
        } else {
            Verdict::Different
        }
    }

    /// Check if the verdict is agreement
    pub fn is_equivalent(&self) -> bool {
        matches!(self, Verdict::Equivalent)
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Equivalent => write!(f, "equivalent"),
            Verdict::Different => write!(f, "different"),
        }
    }
}
