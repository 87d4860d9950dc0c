//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for session results
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Full transcript with phases and outcome
    Full,
    /// Only the final decision document
    Document,
    /// JSON output
    Json,
}

/// CLI arguments for caseboard
#[derive(Parser, Debug)]
#[command(name = "caseboard")]
#[command(author, version, about = "Case board - moderated multi-specialist review sessions")]
#[command(long_about = r#"
Caseboard runs a moderated, turn-based review session over a fixed board of
participants and prints the converged decision document.

The session moves through four phases:
1. Gathering: the moderator calls on specialists by name, one at a time
2. Closing round: every specialist is visited exactly once for final remarks
3. Synthesis: the moderator produces the consolidated decision document
4. Terminated: the configured stop phrase appeared

Configuration files are loaded from (in priority order):
1. CASEBOARD_* environment variables
2. --config <path>        Explicit config file
3. ./caseboard.toml       Project-level config
4. ~/.config/caseboard/config.toml   Global config

Example:
  caseboard --demo
  caseboard --demo --case case.toml -o document
  caseboard --config board.toml --turn-limit 30
"#)]
pub struct Cli {
    /// Run the built-in scripted demo board (no configuration needed)
    #[arg(long)]
    pub demo: bool,

    /// Seed message overriding the configured one
    #[arg(long, value_name = "TEXT")]
    pub seed: Option<String>,

    /// Case file backing participant capabilities
    #[arg(long, value_name = "PATH")]
    pub case: Option<PathBuf>,

    /// Maximum transcript length before the session is cut off
    #[arg(long, value_name = "N")]
    pub turn_limit: Option<usize>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "full")]
    pub output: OutputFormat,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress display
    #[arg(short, long)]
    pub quiet: bool,

    /// Write diagnostic logs to a file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

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
