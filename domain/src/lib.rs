//! Domain layer for duet
//!
//! This crate contains the core value objects and pure logic.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! A [`Question`] is sent to two backends ([`BackendId`]). Each successful
//! call yields an [`AnsweredResponse`]. The primary backend then judges
//! whether the two answers agree, and its reply is parsed into a
//! [`Verdict`] with a strict literal rule.

pub mod answer;
pub mod core;
pub mod prompt;
pub mod util;

// Re-export commonly used types
pub use answer::{AnsweredResponse, Verdict, spread_sections};
pub use core::{backend::BackendId, error::DomainError, question::Question};
pub use prompt::PromptTemplate;
