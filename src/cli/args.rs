//! CLI argument definitions using clap derive

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Disk usage checker with email alerts
///
/// Samples the configured paths once, emails an alert when any of them is
/// above the limit, and appends one line to the run log. Schedule it with
/// cron or a systemd timer for periodic checks.
#[derive(Parser, Debug)]
#[command(name = "diskwatch")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the JSON configuration file
    #[arg(short, long, env = "DISKWATCH_CONFIG")]
    pub config: PathBuf,

    /// Print the alert instead of sending it
    #[arg(long)]
    pub dry_run: bool,

    /// Append the run record here instead of the configured log file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Output format for the run report
    #[arg(long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Output format
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format for machine parsing
    Json,
    /// Compact single-line format
    Compact,
}
