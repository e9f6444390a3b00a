//! Byte size domain type
//!
//! Provides a byte count with human-readable display.

use serde::{Deserialize, Serialize};
use std::fmt;

const UNITS: [&str; 6] = ["B", "KB", "MB", "GB", "TB", "PB"];

/// Size in bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct ByteSize(u64);

impl ByteSize {
    /// Create a new byte size
    pub const fn new(bytes: u64) -> Self {
        Self(bytes)
    }

    /// Get the size in bytes
    #[inline]
    pub const fn as_bytes(&self) -> u64 {
        self.0
    }
}

/// 1024-based units with one decimal, capped at PB
impl fmt::Display for ByteSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut value = self.0 as f64;
        let mut unit = 0;
        while value >= 1024.0 && unit < UNITS.len() - 1 {
            value /= 1024.0;
            unit += 1;
        }
        write!(f, "{:.1} {}", value, UNITS[unit])
    }
}

impl From<u64> for ByteSize {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}
