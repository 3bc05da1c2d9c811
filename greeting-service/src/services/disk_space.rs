//! Free-space check for the filesystem holding the working directory.

use serde::Serialize;
use std::path::{Path, PathBuf};
use sysinfo::Disks;

/// 10 MiB, below which the disk is reported `DOWN`.
pub const DEFAULT_THRESHOLD_BYTES: u64 = 10 * 1024 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HealthStatus {
    Up,
    Down,
    OutOfService,
}

#[derive(Debug, Clone, Serialize)]
pub struct DiskSpaceHealth {
    pub status: HealthStatus,
    pub total: u64,
    pub free: u64,
    pub threshold: u64,
    pub path: PathBuf,
}

#[derive(Debug, Clone)]
pub struct DiskSpaceIndicator {
    path: PathBuf,
    threshold: u64,
}

impl DiskSpaceIndicator {
    pub fn new(path: impl Into<PathBuf>, threshold: u64) -> Self {
        Self {
            path: path.into(),
            threshold,
        }
    }

    /// Reads the disk whose mount point is the longest prefix of the
    /// configured path. An unresolvable path counts as zero free bytes.
    pub fn check(&self) -> DiskSpaceHealth {
        let (path, space) = match std::fs::canonicalize(&self.path) {
            Ok(path) => {
                let space = space_for(&path);
                (path, space)
            }
            Err(_) => (self.path.clone(), None),
        };
        let (total, free) = space.unwrap_or((0, 0));

        let status = if free >= self.threshold {
            HealthStatus::Up
        } else {
            tracing::warn!(
                path = %path.display(),
                free,
                threshold = self.threshold,
                "Free disk space below threshold"
            );
            HealthStatus::Down
        };

        DiskSpaceHealth {
            status,
            total,
            free,
            threshold: self.threshold,
            path,
        }
    }
}

impl Default for DiskSpaceIndicator {
    fn default() -> Self {
        Self::new(".", DEFAULT_THRESHOLD_BYTES)
    }
}

fn space_for(path: &Path) -> Option<(u64, u64)> {
    let disks = Disks::new_with_refreshed_list();

    disks
        .list()
        .iter()
        .filter(|disk| path.starts_with(disk.mount_point()))
        .max_by_key(|disk| disk.mount_point().as_os_str().len())
        .map(|disk| (disk.total_space(), disk.available_space()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_threshold_is_up() {
        let health = DiskSpaceIndicator::new(".", 0).check();

        assert_eq!(health.status, HealthStatus::Up);
        assert!(health.total >= health.free);
        assert!(health.path.is_absolute());
    }

    #[test]
    fn unreachable_threshold_is_down() {
        let health = DiskSpaceIndicator::new(".", u64::MAX).check();

        assert_eq!(health.status, HealthStatus::Down);
        assert_eq!(health.threshold, u64::MAX);
    }

    #[test]
    fn missing_path_is_down() {
        let health = DiskSpaceIndicator::new("/definitely/not/here", 1).check();

        assert_eq!(health.status, HealthStatus::Down);
        assert_eq!(health.free, 0);
    }

    #[test]
    fn status_serializes_screaming_snake_case() {
        assert_eq!(
            serde_json::to_value(HealthStatus::OutOfService).unwrap(),
            "OUT_OF_SERVICE"
        );
    }
}
