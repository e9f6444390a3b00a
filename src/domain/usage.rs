//! Disk usage domain types
//!
//! Provides capacity readings and the per-path sample derived from them.

use super::size::ByteSize;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Percentage of capacity in use, rounded to one decimal
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
pub struct UsagePercent(f64);

impl UsagePercent {
    /// Create a usage percentage, rounding to one decimal and clamping to 0-100
    pub fn new(percent: f64) -> Self {
        let clamped = percent.clamp(0.0, 100.0);
        Self((clamped * 10.0).round() / 10.0)
    }

    /// Compute `used / total × 100`; `None` when total is zero
    pub fn from_ratio(used: u64, total: u64) -> Option<Self> {
        if total == 0 {
            return None;
        }
        Some(Self::new(used as f64 / total as f64 * 100.0))
    }

    /// Get the percentage value
    #[inline]
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Strictly above the limit
    pub fn exceeds(&self, limit_percent: f64) -> bool {
        self.0 > limit_percent
    }
}

impl fmt::Display for UsagePercent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}%", self.0)
    }
}

/// Raw capacity reading for one filesystem
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DiskUsage {
    /// Total capacity
    pub total: ByteSize,
    /// Capacity in use
    pub used: ByteSize,
    /// Capacity available to unprivileged users
    pub free: ByteSize,
}

impl DiskUsage {
    /// Create a new capacity reading
    pub fn new(total: u64, used: u64, free: u64) -> Self {
        Self {
            total: ByteSize::new(total),
            used: ByteSize::new(used),
            free: ByteSize::new(free),
        }
    }

    /// Percent used; `None` for zero-capacity filesystems
    pub fn used_percent(&self) -> Option<UsagePercent> {
        UsagePercent::from_ratio(self.used.as_bytes(), self.total.as_bytes())
    }
}

/// Usage sample for one configured path
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Path as written in the configuration
    pub path: String,
    /// Percent of capacity used
    pub used_percent: UsagePercent,
    /// Capacity reading the percentage came from
    pub usage: DiskUsage,
}

impl Sample {
    /// Create a sample from a reading; `None` for zero-capacity filesystems
    pub fn from_usage(path: impl Into<String>, usage: DiskUsage) -> Option<Self> {
        let used_percent = usage.used_percent()?;
        Some(Self {
            path: path.into(),
            used_percent,
            usage,
        })
    }
}

impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.path, self.used_percent)
    }
}
