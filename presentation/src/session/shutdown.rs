//! Interrupt handling
//!
//! Ctrl+C (and SIGTERM on Unix) cancels the shared token, prints a
//! farewell and exits with status 0.

use crate::output::ConsoleFormatter;
use std::future::Future;
use std::io::{self, Write};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

const INTERRUPT_MESSAGE: &str = "Received interrupt signal. Shutting down gracefully...";

/// Spawn the background task that watches for interrupt signals.
pub fn spawn_interrupt_listener(token: CancellationToken) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut stdout = io::stdout();
        if let Err(e) = shut_down_on(wait_for_interrupt(), &token, &mut stdout).await {
            warn!("Failed to print shutdown message: {}", e);
        }
        std::process::exit(0);
    })
}

/// Wait for `signal`, then cancel `token` and announce the shutdown on `out`.
async fn shut_down_on<F, W>(signal: F, token: &CancellationToken, out: &mut W) -> io::Result<()>
where
    F: Future<Output = ()>,
    W: Write,
{
    signal.await;
    info!("Interrupt received");
    token.cancel();
    writeln!(out, "\n{}", INTERRUPT_MESSAGE)?;
    writeln!(out, "{}", ConsoleFormatter::goodbye())?;
    out.flush()
}

#[cfg(unix)]
async fn wait_for_interrupt() {
    use tokio::signal::unix::{SignalKind, signal};

    match signal(SignalKind::terminate()) {
        Ok(mut sigterm) => {
            tokio::select! {
                res = tokio::signal::ctrl_c() => {
                    if let Err(e) = res {
                        warn!("Ctrl+C handler error: {}", e);
                    }
                }
                _ = sigterm.recv() => {}
            }
        }
        Err(e) => {
            warn!("SIGTERM handler unavailable: {}", e);
            if let Err(e) = tokio::signal::ctrl_c().await {
                warn!("Ctrl+C handler error: {}", e);
            }
        }
    }
}

#[cfg(not(unix))]
async fn wait_for_interrupt() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Ctrl+C handler error: {}", e);
    }
}
