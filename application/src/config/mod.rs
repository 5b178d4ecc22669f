//! Application-level configuration.
//!
//! - [`RetryPolicy`]: attempt budget for the consensus loop

pub mod retry_policy;

pub use retry_policy::{DEFAULT_MAX_RETRIES, RetryPolicy};
