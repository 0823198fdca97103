use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::utils::{clock::Clock, time::record_timestamp};

pub const LOG_HEADER: [&str; 3] = ["timestamp", "screenshot_path", "summary"];

/// One row of the activity log. Field order matches [LOG_HEADER].
#[derive(PartialEq, Eq, Debug, Serialize, Deserialize, Clone)]
pub struct ActivityRecord {
    pub timestamp: String,
    pub screenshot_path: String,
    pub summary: String,
}

/// Append-only CSV table of [ActivityRecord]s.
///
/// There is exactly one writer (the scheduler), so an append simply reads the table, pushes a row
/// and writes the whole table back.
#[derive(Debug, Clone)]
pub struct ActivityLog {
    path: PathBuf,
}

impl ActivityLog {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn initialize(&self) -> Result<()> {
        initialize_log(&self.path)
    }

    /// Reads every record in insertion order. A missing file reads as an empty log.
    pub fn read_all(&self) -> Result<Vec<ActivityRecord>> {
        read_records(&self.path)
    }

    /// Stamps a new record with the current time and persists it.
    pub fn append(
        &self,
        screenshot_path: &Path,
        summary: &str,
        clock: &dyn Clock,
    ) -> Result<ActivityRecord> {
        let record = ActivityRecord {
            timestamp: record_timestamp(&clock.time()),
            screenshot_path: screenshot_path.display().to_string(),
            summary: summary.to_owned(),
        };
        append(&self.path, record.clone())?;
        println!("[\u{2713}] Activity logged at {}\n", record.timestamp);
        Ok(record)
    }
}

/// Creates the log with only the header row. Does nothing when a file is already there, whatever
/// it contains.
pub fn initialize_log(log_path: &Path) -> Result<()> {
    if log_path.exists() {
        debug!("Activity log {log_path:?} already exists");
        return Ok(());
    }
    write_records(log_path, &[])?;
    info!("Created activity log {log_path:?}");
    Ok(())
}

pub fn append(log_path: &Path, record: ActivityRecord) -> Result<()> {
    let mut records = read_records(log_path)?;
    debug!("Appending {record:?} after {} records", records.len());
    records.push(record);
    write_records(log_path, &records)
}

pub fn read_records(log_path: &Path) -> Result<Vec<ActivityRecord>> {
    let mut reader = match csv::Reader::from_path(log_path) {
        Ok(reader) => reader,
        Err(e) if matches!(e.kind(), csv::ErrorKind::Io(io) if io.kind() == ErrorKind::NotFound) => {
            return Ok(vec![])
        }
        Err(e) => return Err(e).with_context(|| format!("Failed to open {log_path:?}")),
    };

    reader
        .deserialize::<ActivityRecord>()
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("Malformed activity log {log_path:?}"))
}

fn write_records(log_path: &Path, records: &[ActivityRecord]) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(log_path)
        .with_context(|| format!("Failed to open {log_path:?} for writing"))?;

    writer.write_record(LOG_HEADER)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}
