//! Configuration builder
//!
//! Merges the configuration file with CLI overrides.

use crate::config::{Config, ConfigFile};
use crate::error::ConfigError;

use std::path::{Path, PathBuf};

/// Builder for merging configuration sources
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Start from an already validated configuration
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Load configuration from a file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Ok(Self::new(ConfigFile::load(path)?))
    }

    /// Override with CLI dry-run flag
    ///
    /// The flag can only switch dry-run on; a config file asking for
    /// dry-run is never overridden into sending.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        if dry_run {
            self.config.dry_run = true;
        }
        self
    }

    /// Override with CLI log file
    pub fn with_log_file(mut self, log_file: Option<PathBuf>) -> Self {
        if let Some(path) = log_file {
            self.config.log_file = Some(path);
        }
        self
    }

    /// Build the final configuration
    pub fn build(self) -> Config {
        self.config
    }
}
