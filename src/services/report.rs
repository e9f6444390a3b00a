//! Run report
//!
//! Summary of a single run, rendered to the run log and to stdout.

use super::sampler::PathReading;
use crate::alerts::AlertEvent;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use std::fmt;

/// What happened to the alert in this run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "kebab-case")]
pub enum Outcome {
    /// Nothing above the limit; notifier not invoked
    NotNeeded,
    /// Alert delivered
    AlertSent,
    /// Alert composed and printed instead of sent
    AlertDryRun,
    /// Delivery failed; the reason is kept for the log
    AlertFailed(String),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotNeeded => write!(f, "ok"),
            Self::AlertSent => write!(f, "alert-sent"),
            Self::AlertDryRun => write!(f, "alert-dry-run"),
            Self::AlertFailed(reason) => write!(f, "alert-failed({})", reason),
        }
    }
}

/// Result of one complete run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunReport {
    /// When sampling started
    pub checked_at: DateTime<Utc>,
    /// Host the paths belong to
    pub hostname: String,
    /// Configured limit
    pub limit_percent: f64,
    /// One reading per configured path, in configured order
    pub readings: Vec<PathReading>,
    /// Alert raised this run, if any
    pub alert: Option<AlertEvent>,
    /// Alert delivery outcome
    pub outcome: Outcome,
}

impl RunReport {
    /// Paths that could not be sampled
    pub fn failed_paths(&self) -> impl Iterator<Item = &str> {
        self.readings
            .iter()
            .filter(|r| r.sample().is_none())
            .map(PathReading::path)
    }

    fn is_offending(&self, path: &str) -> bool {
        self.alert
            .as_ref()
            .is_some_and(|alert| alert.paths().any(|p| p == path))
    }

    /// Per-path summary, e.g. `/=42.0% /home=91.3%! /mnt=error(not found)`
    pub fn summary(&self) -> String {
        self.readings
            .iter()
            .map(|reading| match reading {
                PathReading::Sampled(sample) => {
                    let marker = if self.is_offending(&sample.path) { "!" } else { "" };
                    format!("{}{}", sample, marker)
                }
                PathReading::Failed { path, error } => {
                    format!("{}=error({})", path, error.reason())
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Single run log line: `<timestamp> <summary>`
    pub fn log_line(&self) -> String {
        format!(
            "{} host={} limit={}% {} outcome={}",
            self.checked_at.to_rfc3339_opts(SecondsFormat::Secs, true),
            self.hostname,
            self.limit_percent,
            self.summary(),
            self.outcome
        )
    }
}
