//! Progress notification port
//!
//! Defines the interface for reporting progress while the two backends are
//! queried and compared.

use duet_domain::{BackendId, Verdict};

/// Callback for progress updates during a consensus run
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (spinner, plain text, nothing).
pub trait ConsensusProgressNotifier: Send + Sync {
    /// Called when an attempt starts (`attempt` is 1-based)
    fn on_attempt_start(&self, attempt: u32, max_attempts: u32);

    /// Called when a backend call finishes
    fn on_backend_complete(&self, backend: BackendId, success: bool);

    /// Called before the equivalence judge is consulted
    fn on_judging(&self) {}

    /// Called with the judge's verdict
    fn on_verdict(&self, _verdict: Verdict) {}

    /// Called when an attempt ends without agreement
    fn on_attempt_failed(&self, _attempt: u32, _reason: &str) {}

    /// Called once when the run ends, including when it is cancelled
    fn on_finished(&self) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ConsensusProgressNotifier for NoProgress {
    fn on_attempt_start(&self, _attempt: u32, _max_attempts: u32) {}
    fn on_backend_complete(&self, _backend: BackendId, _success: bool) {}
}
