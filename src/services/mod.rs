//! Service layer for disk usage checks
//!
//! Services encapsulate sampling, evaluation, and run orchestration.

pub mod monitor;
pub mod report;
pub mod sampler;

pub use monitor::Monitor;
pub use report::{Outcome, RunReport};
pub use sampler::{PathReading, UsageSampler};
