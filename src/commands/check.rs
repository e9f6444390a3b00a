//! Check command implementation
//!
//! Loads the configuration, runs one check, and prints the report.

use crate::alerts::{DryRunNotifier, SmtpNotifier};
use crate::cli::output::print_output;
use crate::cli::Cli;
use crate::config::{Config, ConfigBuilder};
use crate::error::Result;
use crate::probe::StatvfsProbe;
use crate::runlog::RunLog;
use crate::services::{Monitor, RunReport};

/// Execute a single check run
///
/// Configuration errors are returned before any sampling, mailing, or log
/// writes take place.
pub fn run_check(cli: &Cli) -> Result<()> {
    let config = ConfigBuilder::from_file(&cli.config)?
        .with_dry_run(cli.dry_run)
        .with_log_file(cli.log_file.clone())
        .build();

    let report = execute(&config);
    print_output(&report, cli.format)?;

    Ok(())
}

/// Run the pipeline with the production probe and notifier
fn execute(config: &Config) -> RunReport {
    let monitor = Monitor::new(config);
    let probe = StatvfsProbe::new();
    let run_log = RunLog::new(config.log_path());

    if config.dry_run {
        log::info!("Dry-run mode: alerts are printed, not sent");
        // Keep stdout for the report itself.
        monitor.run(&probe, &DryRunNotifier::stderr(), &run_log)
    } else {
        monitor.run(&probe, &SmtpNotifier::new(config.smtp.clone()), &run_log)
    }
}
