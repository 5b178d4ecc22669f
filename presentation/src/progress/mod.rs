//! Progress reporters for consensus runs

pub mod reporter;

pub use reporter::{ProgressReporter, SimpleProgress};
