//! Unified error types for diskwatch
//!
//! This module defines all error types used throughout the application.
//! Uses thiserror for ergonomic error definitions.
//!
//! Only [`ConfigError`] is fatal to a run. The other domains are recorded and
//! the run carries on.

use thiserror::Error;

/// Top-level application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from configuration loading/validation
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO error (stdout report, file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) => 2,
            Self::Io(_) => 1,
        }
    }
}

/// Errors from configuration parsing and validation
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// Config file exists but cannot be read
    #[error("Cannot read configuration file {path}: {message}")]
    Unreadable { path: String, message: String },

    /// Failed to parse config file
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    /// Missing required config field
    #[error("Missing required configuration field: {0}")]
    MissingField(String),

    /// Invalid config value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

/// Errors from sampling a single monitored path
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// Path does not exist
    #[error("{path}: no such file or directory")]
    NotFound { path: String },

    /// Path exists but cannot be queried
    #[error("{path}: permission denied")]
    PermissionDenied { path: String },

    /// Filesystem reports no capacity (pseudo filesystem)
    #[error("{path}: filesystem reports zero capacity")]
    ZeroCapacity { path: String },

    /// Any other statvfs failure
    #[error("{path}: {message}")]
    Stat { path: String, message: String },
}

impl PathError {
    /// Path the error refers to
    pub fn path(&self) -> &str {
        match self {
            Self::NotFound { path }
            | Self::PermissionDenied { path }
            | Self::ZeroCapacity { path }
            | Self::Stat { path, .. } => path,
        }
    }

    /// Short reason without the path prefix, used in the run log
    pub fn reason(&self) -> String {
        match self {
            Self::NotFound { .. } => "not found".to_string(),
            Self::PermissionDenied { .. } => "permission denied".to_string(),
            Self::ZeroCapacity { .. } => "zero capacity".to_string(),
            Self::Stat { message, .. } => message.clone(),
        }
    }
}

/// Errors from composing or sending the alert email
#[derive(Error, Debug)]
pub enum NotificationError {
    /// Sender or recipient address does not parse
    #[error("Invalid email address '{address}': {message}")]
    InvalidAddress { address: String, message: String },

    /// Message could not be assembled
    #[error("Failed to build email: {0}")]
    Build(String),

    /// Connection, TLS setup, authentication or delivery failed
    #[error("SMTP error: {0}")]
    Transport(String),

    /// Writing the dry-run preview failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<lettre::transport::smtp::Error> for NotificationError {
    fn from(err: lettre::transport::smtp::Error) -> Self {
        NotificationError::Transport(err.to_string())
    }
}

impl From<lettre::error::Error> for NotificationError {
    fn from(err: lettre::error::Error) -> Self {
        NotificationError::Build(err.to_string())
    }
}

/// Errors from appending to the run log
#[derive(Error, Debug)]
pub enum LogError {
    /// Could not create the log directory
    #[error("Failed to create log directory {path}: {source}")]
    CreateDir {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Could not open or write the log file
    #[error("Failed to write log file {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;
