//! Alert system domain types

use crate::domain::Sample;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Paths above the limit at one point in time
///
/// Only ever constructed non-empty; see [`AlertEvent::new`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlertEvent {
    /// When the offending samples were evaluated
    pub raised_at: DateTime<Utc>,
    /// Limit the samples exceeded
    pub limit_percent: f64,
    /// Offending samples, in configured order
    pub offending: Vec<Sample>,
}

impl AlertEvent {
    /// Create an event; `None` when nothing is over the limit
    pub fn new(raised_at: DateTime<Utc>, limit_percent: f64, offending: Vec<Sample>) -> Option<Self> {
        if offending.is_empty() {
            return None;
        }
        Some(Self {
            raised_at,
            limit_percent,
            offending,
        })
    }

    /// Number of offending paths
    pub fn len(&self) -> usize {
        self.offending.len()
    }

    /// Always false for a constructed event
    pub fn is_empty(&self) -> bool {
        self.offending.is_empty()
    }

    /// Offending paths, in configured order
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.offending.iter().map(|s| s.path.as_str())
    }
}
