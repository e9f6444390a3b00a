//! Configuration file loading
//!
//! Handles loading configuration from JSON files.

use crate::config::{
    Config, MailConfig, Password, SmtpConfig, SmtpSecurity, DEFAULT_SMTP_TIMEOUT_SECS,
    DEFAULT_SUBJECT_PREFIX,
};
use crate::error::ConfigError;

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Configuration file as written on disk
///
/// Every key is optional here so a missing required key is reported by
/// name instead of as a generic parse failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawConfig {
    pub paths: Option<Vec<String>>,
    pub limit_percent: Option<f64>,
    pub smtp_server: Option<String>,
    pub smtp_port: Option<u16>,
    pub smtp_security: Option<SmtpSecurity>,
    pub smtp_username: Option<String>,
    pub smtp_timeout_secs: Option<u64>,
    pub email_sender: Option<String>,
    pub email_password: Option<String>,
    pub email_recipients: Option<Vec<String>>,
    pub subject_prefix: Option<String>,
    pub hostname: Option<String>,
    #[serde(default)]
    pub dry_run: bool,
    pub log_file: Option<PathBuf>,
}

impl RawConfig {
    /// Validate and convert into the immutable run configuration
    pub fn validate(self) -> Result<Config, ConfigError> {
        let paths = required(self.paths, "paths")?;
        if paths.is_empty() {
            return Err(invalid("paths", "must list at least one path"));
        }
        if let Some(blank) = paths.iter().position(|p| p.trim().is_empty()) {
            return Err(invalid("paths", &format!("entry {} is empty", blank)));
        }

        let limit_percent = required(self.limit_percent, "limit_percent")?;
        if !limit_percent.is_finite() || !(0.0..=100.0).contains(&limit_percent) {
            return Err(invalid(
                "limit_percent",
                &format!("{} is not between 0 and 100", limit_percent),
            ));
        }

        let server = non_blank(required(self.smtp_server, "smtp_server")?, "smtp_server")?;
        let port = required(self.smtp_port, "smtp_port")?;
        if port == 0 {
            return Err(invalid("smtp_port", "must be between 1 and 65535"));
        }

        let sender = non_blank(required(self.email_sender, "email_sender")?, "email_sender")?;
        let recipients = required(self.email_recipients, "email_recipients")?;
        if recipients.is_empty() {
            return Err(invalid(
                "email_recipients",
                "must list at least one recipient",
            ));
        }

        let timeout_secs = self.smtp_timeout_secs.unwrap_or(DEFAULT_SMTP_TIMEOUT_SECS);
        if timeout_secs == 0 {
            return Err(invalid("smtp_timeout_secs", "must be greater than zero"));
        }

        let username = self
            .smtp_username
            .filter(|u| !u.trim().is_empty())
            .unwrap_or_else(|| sender.clone());

        Ok(Config {
            paths,
            limit_percent,
            smtp: SmtpConfig {
                server,
                port,
                security: self.smtp_security.unwrap_or_default(),
                username,
                password: self
                    .email_password
                    .filter(|p| !p.is_empty())
                    .map(Password::new),
                timeout: Duration::from_secs(timeout_secs),
            },
            mail: MailConfig {
                sender,
                recipients,
                subject_prefix: self
                    .subject_prefix
                    .unwrap_or_else(|| DEFAULT_SUBJECT_PREFIX.to_string()),
            },
            hostname: self.hostname.filter(|h| !h.trim().is_empty()),
            dry_run: self.dry_run,
            log_file: self.log_file,
        })
    }
}

fn required<T>(value: Option<T>, key: &str) -> Result<T, ConfigError> {
    value.ok_or_else(|| ConfigError::MissingField(key.to_string()))
}

fn non_blank(value: String, key: &str) -> Result<String, ConfigError> {
    if value.trim().is_empty() {
        return Err(invalid(key, "must not be empty"));
    }
    Ok(value.trim().to_string())
}

fn invalid(key: &str, message: &str) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        message: message.to_string(),
    }
}

/// Configuration file handler
pub struct ConfigFile;

impl ConfigFile {
    /// Load and validate configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ConfigError::FileNotFound(path.display().to_string()),
            _ => ConfigError::Unreadable {
                path: path.display().to_string(),
                message: e.to_string(),
            },
        })?;

        let config = Self::parse(&content)?;

        if config.smtp.password.is_some() {
            warn_if_exposed(path);
        }

        log::debug!(
            "Loaded config from {} ({} paths, limit {}%)",
            path.display(),
            config.paths.len(),
            config.limit_percent
        );
        Ok(config)
    }

    /// Parse and validate configuration from a JSON string
    pub fn parse(content: &str) -> Result<Config, ConfigError> {
        let raw: RawConfig = serde_json::from_str(content)?;
        raw.validate()
    }

    /// Default run log location
    pub fn default_log_path() -> PathBuf {
        if let Some(data_dir) = dirs::data_local_dir() {
            data_dir.join("diskwatch").join("diskwatch.log")
        } else {
            PathBuf::from("diskwatch.log")
        }
    }
}

#[cfg(unix)]
fn warn_if_exposed(path: &Path) {
    use std::os::unix::fs::PermissionsExt;

    if let Ok(meta) = std::fs::metadata(path) {
        if meta.permissions().mode() & 0o077 != 0 {
            log::warn!(
                "{} stores an SMTP password and is accessible to other users; consider chmod 600",
                path.display()
            );
        }
    }
}

#[cfg(not(unix))]
fn warn_if_exposed(_path: &Path) {}
