//! Prompt domain
//!
//! Templates for the question decoration and the equivalence comparison.

mod template;

pub use template::PromptTemplate;
