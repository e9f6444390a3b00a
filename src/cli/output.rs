//! Output formatting utilities
//!
//! Provides table and JSON output formatting for the run report.

use crate::cli::args::OutputFormat;
use crate::services::{PathReading, RunReport};
use serde::Serialize;
use std::io::{self, Write};

/// Format and print output based on the selected format
pub fn print_output<T: Serialize + TableDisplay>(data: &T, format: OutputFormat) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();

    match format {
        OutputFormat::Table => {
            writeln!(handle, "{}", data.to_table())?;
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(data).unwrap_or_else(|_| "{}".to_string());
            writeln!(handle, "{}", json)?;
        }
        OutputFormat::Compact => {
            writeln!(handle, "{}", data.to_compact())?;
        }
    }

    Ok(())
}

/// Trait for types that can be displayed as a table
pub trait TableDisplay {
    /// Format as a table string
    fn to_table(&self) -> String;

    /// Format as a compact single line
    fn to_compact(&self) -> String {
        self.to_table().replace('\n', " | ")
    }
}

impl TableDisplay for RunReport {
    fn to_table(&self) -> String {
        let width = self
            .readings
            .iter()
            .map(|r| r.path().len())
            .max()
            .unwrap_or(0)
            .max("PATH".len());

        let mut lines = vec![
            format!(
                "Host: {}  Limit: {}%  Checked: {}",
                self.hostname,
                self.limit_percent,
                self.checked_at.format("%Y-%m-%d %H:%M:%S UTC")
            ),
            format!("{:<width$}  {:>7}  {:>10}  {:>10}", "PATH", "USED", "SIZE", "FREE"),
        ];

        for reading in &self.readings {
            lines.push(match reading {
                PathReading::Sampled(sample) => format!(
                    "{:<width$}  {:>7}  {:>10}  {:>10}",
                    sample.path,
                    sample.used_percent.to_string(),
                    sample.usage.total.to_string(),
                    sample.usage.free.to_string(),
                ),
                PathReading::Failed { path, error } => {
                    format!("{:<width$}  error: {}", path, error.reason())
                }
            });
        }

        lines.push(format!("Outcome: {}", self.outcome));
        lines.join("\n")
    }

    fn to_compact(&self) -> String {
        format!("{} {}", self.summary(), self.outcome)
    }
}
