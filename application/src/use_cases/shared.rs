//! Shared utilities for use cases.
//!
//! Cancellation checking and cancellable backend calls.

use crate::use_cases::run_consensus::RunConsensusError;
use std::future::Future;
use tokio_util::sync::CancellationToken;

/// Check if cancellation has been requested.
///
/// Returns `Err(RunConsensusError::Cancelled)` if the token exists and is cancelled.
pub(crate) fn check_cancelled(token: &Option<CancellationToken>) -> Result<(), RunConsensusError> {
    if let Some(token) = token
        && token.is_cancelled()
    {
        return Err(RunConsensusError::Cancelled);
    }
    Ok(())
}

/// Await `future` unless the token fires first.
///
/// A cancelled call is dropped mid-flight; whatever the remote side already
/// did is not rolled back.
pub(crate) async fn run_cancellable<F, T>(
    token: &Option<CancellationToken>,
    future: F,
) -> Result<T, RunConsensusError>
where
    F: Future<Output = T>,
{
    match token {
        Some(token) => tokio::select! {
            _ = token.cancelled() => Err(RunConsensusError::Cancelled),
            output = future => Ok(output),
        },
        None => Ok(future.await),
    }
}
