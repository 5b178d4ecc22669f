//! Progress reporting while the backends are queried

use colored::Colorize;
use duet_application::ConsensusProgressNotifier;
use duet_domain::{BackendId, Verdict};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// Reports progress with a spinner on stderr
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn set_message(&self, message: String) {
        if let Some(pb) = self.spinner.lock().unwrap().as_ref() {
            pb.set_message(message);
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsensusProgressNotifier for ProgressReporter {
    fn on_attempt_start(&self, attempt: u32, max_attempts: u32) {
        let mut guard = self.spinner.lock().unwrap();
        let pb = guard.get_or_insert_with(|| {
            let pb = ProgressBar::new_spinner();
            pb.set_style(Self::spinner_style());
            pb.enable_steady_tick(Duration::from_millis(100));
            pb
        });
        pb.set_prefix(format!("Attempt {}/{}", attempt, max_attempts));
        pb.set_message(format!("asking {}...", BackendId::Gemini));
    }

    fn on_backend_complete(&self, backend: BackendId, success: bool) {
        let status = if success {
            format!("{} {}", "v".green(), backend)
        } else {
            format!("{} {} failed", "x".red(), backend)
        };
        self.set_message(status);
    }

    fn on_judging(&self) {
        self.set_message("comparing answers...".to_string());
    }

    fn on_attempt_failed(&self, _attempt: u32, reason: &str) {
        self.set_message(format!("{} {}", "x".red(), reason));
    }

    fn on_finished(&self) {
        if let Some(pb) = self.spinner.lock().unwrap().take() {
            pb.finish_and_clear();
        }
    }
}

/// Simple text-based progress (no fancy UI), one line per event on stderr
pub struct SimpleProgress;

impl ConsensusProgressNotifier for SimpleProgress {
    fn on_attempt_start(&self, attempt: u32, max_attempts: u32) {
        eprintln!(
            "{} {}",
            "->".cyan(),
            format!("Attempt {}/{}", attempt, max_attempts).bold()
        );
    }

    fn on_backend_complete(&self, backend: BackendId, success: bool) {
        if success {
            eprintln!("  {} {}", "v".green(), backend);
        } else {
            eprintln!("  {} {} (failed)", "x".red(), backend);
        }
    }

    fn on_verdict(&self, verdict: Verdict) {
        eprintln!("  {} answers {}", "=".cyan(), verdict);
    }
}
