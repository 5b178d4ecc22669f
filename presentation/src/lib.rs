//! Presentation layer for duet
//!
//! This crate contains CLI definitions, output formatting,
//! progress reporters, and the interactive question session.

pub mod cli;
pub mod config;
pub mod output;
pub mod progress;
pub mod session;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use config::OutputConfig;
pub use output::console::ConsoleFormatter;
pub use progress::reporter::{ProgressReporter, SimpleProgress};
pub use session::{InteractiveSession, SessionEnd, spawn_interrupt_listener};
