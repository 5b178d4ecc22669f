//! Core domain concepts shared across all subdomains.
//!
//! - [`backend::BackendId`]: the two answering backends
//! - [`question::Question`]: a validated question to pose to both backends
//! - [`error::DomainError`]: domain-level errors

pub mod backend;
pub mod error;
pub mod question;
