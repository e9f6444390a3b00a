//! Mock implementations for testing
//!
//! Provides a mock usage source and a recording notifier for unit testing
//! without touching real filesystems or mail servers.

use crate::alerts::{AlertMessage, Notifier};
use crate::config::{Config, MailConfig, Password, SmtpConfig, SmtpSecurity};
use crate::domain::DiskUsage;
use crate::error::{NotificationError, PathError};
use crate::probe::UsageProbe;

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

/// Mock usage source for testing
///
/// Paths without a configured reading report [`PathError::NotFound`].
#[derive(Debug, Default)]
pub struct MockProbe {
    readings: HashMap<String, Result<DiskUsage, PathError>>,
    hostname: Option<String>,
}

impl MockProbe {
    /// Create an empty mock probe
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: report `usage` for `path`
    pub fn with_usage(mut self, path: impl Into<String>, usage: DiskUsage) -> Self {
        self.readings.insert(path.into(), Ok(usage));
        self
    }

    /// Builder: fail `path` with `error`
    pub fn with_error(mut self, path: impl Into<String>, error: PathError) -> Self {
        self.readings.insert(path.into(), Err(error));
        self
    }

    /// Builder: set hostname
    pub fn with_hostname(mut self, hostname: impl Into<String>) -> Self {
        self.hostname = Some(hostname.into());
        self
    }
}

impl UsageProbe for MockProbe {
    fn disk_usage(&self, path: &Path) -> Result<DiskUsage, PathError> {
        let key = path.display().to_string();
        match self.readings.get(&key) {
            Some(reading) => reading.clone(),
            None => Err(PathError::NotFound { path: key }),
        }
    }

    fn hostname(&self) -> Option<String> {
        self.hostname.clone()
    }
}

/// Notifier that records every message instead of delivering it
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    sent: RefCell<Vec<AlertMessage>>,
    attempts: RefCell<usize>,
    failure: Option<String>,
}

impl RecordingNotifier {
    /// Create a notifier that accepts every message
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a notifier whose every attempt fails with a transport error
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            failure: Some(reason.into()),
            ..Self::default()
        }
    }

    /// Messages accepted so far
    pub fn sent(&self) -> Vec<AlertMessage> {
        self.sent.borrow().clone()
    }

    /// Number of messages accepted
    pub fn sent_count(&self) -> usize {
        self.sent.borrow().len()
    }

    /// Number of delivery attempts, successful or not
    pub fn attempts(&self) -> usize {
        *self.attempts.borrow()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &AlertMessage) -> Result<(), NotificationError> {
        *self.attempts.borrow_mut() += 1;
        if let Some(reason) = &self.failure {
            return Err(NotificationError::Transport(reason.clone()));
        }
        self.sent.borrow_mut().push(message.clone());
        Ok(())
    }

    fn name(&self) -> &str {
        "recording"
    }
}

/// Valid configuration for tests
pub fn sample_config() -> Config {
    Config {
        paths: vec!["/".to_string(), "/home".to_string()],
        limit_percent: 80.0,
        smtp: SmtpConfig {
            server: "smtp.example.com".to_string(),
            port: 587,
            security: SmtpSecurity::Starttls,
            username: "monitor@example.com".to_string(),
            password: Some(Password::new("s3cret")),
            timeout: Duration::from_secs(30),
        },
        mail: MailConfig {
            sender: "monitor@example.com".to_string(),
            recipients: vec![
                "admin@example.com".to_string(),
                "ops@example.com".to_string(),
            ],
            subject_prefix: "[DISK ALERT]".to_string(),
        },
        hostname: None,
        dry_run: false,
        log_file: None,
    }
}
