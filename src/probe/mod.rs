//! Filesystem capacity abstraction layer
//!
//! Provides trait-based abstractions over `statvfs` for testability.

pub mod statvfs;
pub mod traits;

pub use statvfs::StatvfsProbe;
pub use traits::UsageProbe;
