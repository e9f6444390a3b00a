//! Usage sampler
//!
//! Samples every configured path, keeping failures apart from readings.

use crate::domain::Sample;
use crate::error::PathError;
use crate::probe::UsageProbe;

use serde::Serialize;
use std::path::Path;

/// Outcome of sampling one configured path
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum PathReading {
    /// Capacity was read
    Sampled(Sample),
    /// Path could not be sampled
    Failed {
        path: String,
        #[serde(serialize_with = "serialize_reason")]
        error: PathError,
    },
}

impl PathReading {
    /// Path as configured
    pub fn path(&self) -> &str {
        match self {
            Self::Sampled(sample) => &sample.path,
            Self::Failed { path, .. } => path,
        }
    }

    /// The sample, if the path was readable
    pub fn sample(&self) -> Option<&Sample> {
        match self {
            Self::Sampled(sample) => Some(sample),
            Self::Failed { .. } => None,
        }
    }
}

fn serialize_reason<S: serde::Serializer>(error: &PathError, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&error.reason())
}

/// Samples configured paths through a [`UsageProbe`]
pub struct UsageSampler<'a, P: UsageProbe> {
    probe: &'a P,
}

impl<'a, P: UsageProbe> UsageSampler<'a, P> {
    /// Create a new sampler
    pub fn new(probe: &'a P) -> Self {
        Self { probe }
    }

    /// Sample a single path
    pub fn sample(&self, path: &str) -> Result<Sample, PathError> {
        let usage = self.probe.disk_usage(Path::new(path))?;
        Sample::from_usage(path, usage).ok_or_else(|| PathError::ZeroCapacity {
            path: path.to_string(),
        })
    }

    /// Sample every path in order; a failing path does not stop the others
    pub fn sample_all(&self, paths: &[String]) -> Vec<PathReading> {
        paths
            .iter()
            .map(|path| match self.sample(path) {
                Ok(sample) => {
                    log::debug!("Sampled {}", sample);
                    PathReading::Sampled(sample)
                }
                Err(error) => {
                    log::warn!("Skipping {}", error);
                    PathReading::Failed {
                        path: path.clone(),
                        error,
                    }
                }
            })
            .collect()
    }
}
