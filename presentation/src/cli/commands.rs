//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for duet
#[derive(Parser, Debug)]
#[command(name = "duet")]
#[command(author, version, about = "Ask two LLMs the same question until they agree")]
#[command(long_about = r#"
Duet sends every question to Gemini and Groq, then asks Gemini whether the
two answers mean the same thing. Agreement prints one answer; disagreement
retries up to --max-retries times and then shows both answers side by side.

Questions are entered interactively and may span several lines. Type `exit`
to quit, or press Ctrl+D to submit the question.

Credentials are read from GEMINI_API_KEY and GROQ_API_KEY (a `.env` file in
the working directory is loaded first).

Configuration files are loaded from (in priority order):
1. DUET_* environment variables (e.g. DUET_RETRY__MAX_RETRIES=5)
2. --config <path>     Explicit config file
3. ./duet.toml         Project-level config
4. ~/.config/duet/config.toml   Global config
"#)]
pub struct Cli {
    /// Maximum attempts per question before giving up
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    pub max_retries: Option<u32>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
