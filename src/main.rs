//! diskwatch - disk usage checker with email alerts
//!
//! Runs one check per invocation; schedule it externally for periodic checks.

use clap::Parser;
use diskwatch::cli::Cli;
use diskwatch::commands::run_check;
use diskwatch::error::{AppError, ConfigError};

fn main() {
    let cli = Cli::parse();

    // Initialize logging; --verbose overrides RUST_LOG
    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if cli.verbose {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.format_timestamp(None).init();

    if let Err(e) = run_check(&cli) {
        log::error!("{}", e);
        print_error(&e);
        std::process::exit(e.exit_code());
    }
}

fn print_error(err: &AppError) {
    eprintln!("Error: {}", err);

    match err {
        AppError::Config(ConfigError::FileNotFound(_)) => {
            eprintln!();
            eprintln!("Hint: Pass the configuration with --config <path>");
            eprintln!("      or set DISKWATCH_CONFIG.");
        }
        AppError::Config(ConfigError::MissingField(_)) => {
            eprintln!();
            eprintln!("Hint: Required keys are paths, limit_percent, smtp_server,");
            eprintln!("      smtp_port, email_sender and email_recipients.");
        }
        _ => {}
    }
}
