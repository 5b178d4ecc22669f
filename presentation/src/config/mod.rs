//! Presentation-level configuration
//!
//! Resolved output settings after file configuration and CLI flags are
//! combined.

use crate::cli::commands::Cli;
use crate::progress::{ProgressReporter, SimpleProgress};
use duet_application::{ConsensusProgressNotifier, NoProgress};
use std::io::IsTerminal;

/// Output configuration for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputConfig {
    /// Enable colored terminal output
    pub color: bool,
    /// Show progress while the backends work
    pub show_progress: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: true,
            show_progress: true,
        }
    }
}

impl OutputConfig {
    pub fn new(color: bool, show_progress: bool) -> Self {
        Self {
            color,
            show_progress,
        }
    }

    /// CLI flags can only turn things off
    pub fn with_cli_overrides(mut self, cli: &Cli) -> Self {
        if cli.no_color {
            self.color = false;
        }
        if cli.quiet {
            self.show_progress = false;
        }
        self
    }

    /// Pick a progress notifier: a spinner on a terminal, plain lines otherwise.
    pub fn progress_notifier(&self) -> Box<dyn ConsensusProgressNotifier> {
        if !self.show_progress {
            Box::new(NoProgress)
        } else if std::io::stderr().is_terminal() {
            Box::new(ProgressReporter::new())
        } else {
            Box::new(SimpleProgress)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cli_overrides_turn_off() {
        let cli = Cli::try_parse_from(["duet", "--no-color", "-q"]).unwrap();
        let config = OutputConfig::default().with_cli_overrides(&cli);
        assert_eq!(config, OutputConfig::new(false, false));
    }

    #[test]
    fn test_cli_cannot_turn_on() {
        let cli = Cli::try_parse_from(["duet"]).unwrap();
        let config = OutputConfig::new(false, false).with_cli_overrides(&cli);
        assert!(!config.color);
        assert!(!config.show_progress);
    }
}
