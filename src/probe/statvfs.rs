//! statvfs-backed usage probe

use super::traits::UsageProbe;
use crate::domain::DiskUsage;
use crate::error::PathError;

use nix::errno::Errno;
use nix::sys::statvfs::statvfs;
use std::path::Path;

/// Reads capacity with the POSIX `statvfs` call
#[derive(Debug, Clone, Copy, Default)]
pub struct StatvfsProbe;

impl StatvfsProbe {
    /// Create a new probe
    pub fn new() -> Self {
        Self
    }
}

impl UsageProbe for StatvfsProbe {
    fn disk_usage(&self, path: &Path) -> Result<DiskUsage, PathError> {
        let stat = statvfs(path).map_err(|errno| map_errno(path, errno))?;

        // Block counts are in units of the fragment size, not f_bsize.
        let fragment = stat.fragment_size() as u64;
        let total = stat.blocks() as u64 * fragment;
        let free_all = stat.blocks_free() as u64 * fragment;
        let available = stat.blocks_available() as u64 * fragment;
        let used = total.saturating_sub(free_all);

        log::debug!(
            "statvfs {}: total={} used={} available={}",
            path.display(),
            total,
            used,
            available
        );

        Ok(DiskUsage::new(total, used, available))
    }

    fn hostname(&self) -> Option<String> {
        match nix::unistd::gethostname() {
            Ok(name) => name.into_string().ok(),
            Err(e) => {
                log::warn!("Failed to read hostname: {}", e);
                None
            }
        }
    }
}

fn map_errno(path: &Path, errno: Errno) -> PathError {
    let path = path.display().to_string();
    match errno {
        Errno::ENOENT | Errno::ENOTDIR => PathError::NotFound { path },
        Errno::EACCES | Errno::EPERM => PathError::PermissionDenied { path },
        other => PathError::Stat {
            path,
            message: other.desc().to_string(),
        },
    }
}
