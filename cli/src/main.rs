//! CLI entrypoint for duet
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use duet_application::{RetryPolicy, RunConsensusUseCase};
use duet_infrastructure::{ConfigLoader, Credentials, create_backends, load_dotenv};
use duet_presentation::{
    Cli, InteractiveSession, OutputConfig, SessionEnd, spawn_interrupt_listener,
};
use tokio::io::BufReader;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    info!("Starting duet");

    // .env may carry DUET_* overrides as well as the API keys
    load_dotenv();

    // === Configuration ===
    let file_config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("Failed to load configuration")?
    };

    let issues = file_config.validate();
    if !issues.is_empty() {
        for issue in &issues {
            error!("{}", issue);
        }
        bail!("Invalid configuration: {} issue(s) found", issues.len());
    }

    let policy = match cli.max_retries {
        Some(max_retries) => RetryPolicy::new(max_retries)?,
        None => file_config.retry.to_policy()?,
    };

    let output = OutputConfig::new(file_config.output.color, file_config.output.show_progress)
        .with_cli_overrides(&cli);
    if !output.color {
        colored::control::set_override(false);
    }

    // === Dependency Injection ===
    let credentials = Credentials::from_env(&file_config.backends)?;
    let backends = create_backends(&file_config.backends, &credentials)?;

    let token = CancellationToken::new();
    let listener = spawn_interrupt_listener(token.clone());

    let use_case = RunConsensusUseCase::new(backends.primary, backends.secondary)
        .with_cancellation(token.clone());

    let session = InteractiveSession::new(
        use_case,
        policy,
        BufReader::new(tokio::io::stdin()),
        std::io::stdout(),
    )
    .with_progress(output.progress_notifier())
    .with_cancellation(token);

    match session.run().await? {
        // The listener prints the farewell and exits the process
        SessionEnd::Cancelled => {
            let _ = listener.await;
        }
        SessionEnd::ExitRequested | SessionEnd::EndOfInput => {
            info!("Session ended");
        }
    }

    Ok(())
}
