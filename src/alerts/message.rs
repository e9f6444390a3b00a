//! Alert email composition
//!
//! Builds the plain-text subject and body independently of any transport.

use super::types::AlertEvent;
use crate::config::MailConfig;

use std::fmt::Write;

const RULE_WIDTH: usize = 40;

/// Composed alert, ready for a [`Notifier`](super::Notifier)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertMessage {
    /// Sender address
    pub from: String,
    /// Recipient addresses
    pub to: Vec<String>,
    /// Subject line
    pub subject: String,
    /// Plain-text body
    pub body: String,
}

impl AlertMessage {
    /// Compose the alert for an event
    pub fn compose(event: &AlertEvent, mail: &MailConfig, hostname: &str) -> Self {
        let subject = format!(
            "{} {} - {} path(s) above {}%",
            mail.subject_prefix,
            hostname,
            event.len(),
            event.limit_percent
        );

        let mut body = String::new();
        // Writing into a String cannot fail.
        let _ = writeln!(body, "Disk usage report - {}", hostname);
        let _ = writeln!(
            body,
            "Generated at: {}",
            event.raised_at.format("%Y-%m-%d %H:%M:%S UTC")
        );
        let _ = writeln!(body);
        let _ = writeln!(body, "Paths above the {}% limit:", event.limit_percent);
        let _ = writeln!(body);

        for sample in &event.offending {
            let _ = writeln!(body, "Path: {}", sample.path);
            let _ = writeln!(body, "Usage: {}", sample.used_percent);
            let _ = writeln!(
                body,
                "Total: {} | Used: {} | Free: {}",
                sample.usage.total, sample.usage.used, sample.usage.free
            );
            let _ = writeln!(body, "{}", "-".repeat(RULE_WIDTH));
        }

        Self {
            from: mail.sender.clone(),
            to: mail.recipients.clone(),
            subject,
            body,
        }
    }
}
