//! Configuration system
//!
//! Handles JSON config file parsing, validation, and CLI override merging.
//! A [`Config`] is built once per run and only read afterwards.

pub mod builder;
pub mod file;

pub use builder::ConfigBuilder;
pub use file::{ConfigFile, RawConfig};

use serde::Deserialize;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// Default subject prefix for alert emails
pub const DEFAULT_SUBJECT_PREFIX: &str = "[DISK ALERT]";

/// Default SMTP timeout in seconds
pub const DEFAULT_SMTP_TIMEOUT_SECS: u64 = 30;

/// Main configuration structure
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Monitored paths, in configured order
    pub paths: Vec<String>,
    /// Alert when used percent is strictly above this value
    pub limit_percent: f64,
    /// SMTP connection settings
    pub smtp: SmtpConfig,
    /// Alert email settings
    pub mail: MailConfig,
    /// Hostname shown in the alert; system hostname when unset
    pub hostname: Option<String>,
    /// Print the alert instead of sending it
    pub dry_run: bool,
    /// Run log location; default location when unset
    pub log_file: Option<PathBuf>,
}

impl Config {
    /// Run log path, falling back to the default location
    pub fn log_path(&self) -> PathBuf {
        self.log_file
            .clone()
            .unwrap_or_else(ConfigFile::default_log_path)
    }
}

/// SMTP connection configuration
#[derive(Debug, Clone, PartialEq)]
pub struct SmtpConfig {
    /// Server hostname
    pub server: String,
    /// Server port
    pub port: u16,
    /// Transport security mode
    pub security: SmtpSecurity,
    /// Login name (sender address unless overridden)
    pub username: String,
    /// Login password; no authentication when absent
    pub password: Option<Password>,
    /// Connection/command timeout
    pub timeout: Duration,
}

/// Alert email configuration
#[derive(Debug, Clone, PartialEq)]
pub struct MailConfig {
    /// Sender address
    pub sender: String,
    /// Recipient addresses, all addressed in one message
    pub recipients: Vec<String>,
    /// Prefix for the subject line
    pub subject_prefix: String,
}

/// SMTP transport security
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SmtpSecurity {
    /// Plaintext connection upgraded with STARTTLS (usually port 587)
    #[default]
    Starttls,
    /// Implicit TLS from the first byte (usually port 465)
    Tls,
    /// No encryption
    None,
}

impl fmt::Display for SmtpSecurity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Starttls => write!(f, "starttls"),
            Self::Tls => write!(f, "tls"),
            Self::None => write!(f, "none"),
        }
    }
}

/// SMTP password read from the configuration file
///
/// The value is stored in plaintext on disk; `Debug` never prints it.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    /// Wrap a password
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Plaintext value, for handing to the SMTP client
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Password(***)")
    }
}
