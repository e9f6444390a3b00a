//! Trait definitions for filesystem capacity queries
//!
//! These traits abstract over the OS to enable testing with mocks.

use crate::domain::DiskUsage;
use crate::error::PathError;

use std::path::Path;

/// Source of filesystem capacity readings
///
/// Implemented by [`StatvfsProbe`](super::StatvfsProbe) in production and by
/// mock sources in tests.
pub trait UsageProbe {
    /// Capacity of the filesystem containing `path`
    fn disk_usage(&self, path: &Path) -> Result<DiskUsage, PathError>;

    /// Name of the local host, if it can be determined
    fn hostname(&self) -> Option<String>;
}
