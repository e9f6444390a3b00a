//! Domain models for diskwatch
//!
//! Plain value types passed between the pipeline stages.

pub mod size;
pub mod usage;

pub use size::ByteSize;
pub use usage::{DiskUsage, Sample, UsagePercent};
