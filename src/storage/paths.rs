use std::{
    io,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use tracing::debug;

pub const SCREENSHOT_DIR_NAME: &str = "screenshots";
pub const REPORT_DIR_NAME: &str = "reports";
pub const LOG_FILE_NAME: &str = "activity_log.csv";

/// Resolved locations of the screenshot store, the report store and the activity log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoragePaths {
    pub screenshot_dir: PathBuf,
    pub report_dir: PathBuf,
    pub log_path: PathBuf,
}

impl StoragePaths {
    pub fn from_base(base: &Path) -> Self {
        let report_dir = base.join(REPORT_DIR_NAME);
        Self {
            screenshot_dir: base.join(SCREENSHOT_DIR_NAME),
            log_path: report_dir.join(LOG_FILE_NAME),
            report_dir,
        }
    }

    pub fn ensure(&self) -> Result<()> {
        ensure_directories(&self.screenshot_dir, &self.report_dir)
    }
}

/// Creates both directories together with any missing parents. Existing directories are left
/// untouched.
pub fn ensure_directories(screenshot_dir: &Path, report_dir: &Path) -> Result<()> {
    for dir in [screenshot_dir, report_dir] {
        create_dir(dir).with_context(|| format!("Failed to create directory {dir:?}"))?;
    }
    Ok(())
}

fn create_dir(dir: &Path) -> io::Result<()> {
    debug!("Ensuring directory {dir:?}");
    match std::fs::create_dir_all(dir) {
        Ok(_) => Ok(()),
        Err(v) if v.kind() == io::ErrorKind::AlreadyExists => Ok(()),
        Err(v) => Err(v),
    }
}
