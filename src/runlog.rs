//! Append-only run log
//!
//! One line per run. Failures here are reported as diagnostics and never
//! abort a run.

use crate::error::LogError;

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Append-only plain-text log file
#[derive(Debug, Clone)]
pub struct RunLog {
    path: PathBuf,
}

impl RunLog {
    /// Create a handle for the log at `path`; nothing is touched yet
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Log file location
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one line, creating the file and parent directory if needed
    pub fn append(&self, line: &str) -> Result<(), LogError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| LogError::CreateDir {
                path: parent.display().to_string(),
                source,
            })?;
        }

        let write_err = |source| LogError::Write {
            path: self.path.display().to_string(),
            source,
        };

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(write_err)?;

        // Keep one record per line even if a caller passes embedded newlines.
        let line = line.replace(['\r', '\n'], " ");
        writeln!(file, "{}", line).map_err(write_err)?;
        Ok(())
    }

    /// Best-effort append; returns whether the line was written
    pub fn record(&self, line: &str) -> bool {
        match self.append(line) {
            Ok(()) => {
                log::debug!("Appended run record to {}", self.path.display());
                true
            }
            Err(e) => {
                log::warn!("Run log not written: {}", e);
                false
            }
        }
    }
}
