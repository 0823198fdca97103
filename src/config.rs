use std::{path::Path, time::Duration};

use crate::storage::paths::StoragePaths;

pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(15 * 60);
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(60);

/// Everything the tracker needs to know besides its collaborators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerConfig {
    pub paths: StoragePaths,
    /// Time between two cycles.
    pub interval: Duration,
    /// How often the scheduler wakes up to check whether a cycle is due. This is also the
    /// granularity at which an interrupt is noticed.
    pub poll_interval: Duration,
}

impl TrackerConfig {
    pub fn new(base: &Path) -> Self {
        Self {
            paths: StoragePaths::from_base(base),
            interval: DEFAULT_INTERVAL,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }
}
