//! Shutdown time summary of the whole activity log.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use tracing::info;

use crate::{
    storage::activity_log::{read_records, ActivityRecord},
    utils::{
        clock::Clock,
        time::{file_timestamp, precise_timestamp},
    },
};

pub const REPORT_TITLE: &str = "=== Productivity Report ===";

/// Writes `report_<timestamp>.txt` into `report_dir` listing every logged activity. Nothing is
/// written when the log is missing or empty, in which case `None` is returned.
pub fn generate_report(
    log_path: &Path,
    report_dir: &Path,
    clock: &dyn Clock,
) -> Result<Option<PathBuf>> {
    let records = read_records(log_path)?;
    if records.is_empty() {
        info!("Skipping report, {log_path:?} has no records");
        println!("No activity logged yet.");
        return Ok(None);
    }

    let now = clock.time();
    let report_path = report_dir.join(format!("report_{}.txt", file_timestamp(&now)));
    fs::write(&report_path, render_report(&records, &precise_timestamp(&now)))
        .with_context(|| format!("Failed to write report {report_path:?}"))?;

    info!("Report with {} entries written to {report_path:?}", records.len());
    println!("[\u{1f4c4}] Report generated: {}", report_path.display());
    Ok(Some(report_path))
}

pub fn render_report(records: &[ActivityRecord], generated_on: &str) -> String {
    let entries = records
        .iter()
        .map(|record| format!("- {}: {}", record.timestamp, record.summary))
        .collect::<Vec<_>>()
        .join("\n");

    format!("{REPORT_TITLE}\nGenerated on: {generated_on}\n\n{entries}")
}

#[cfg(test)]
mod tests {
    use anyhow::Result;
    use chrono::NaiveDate;
    use tempfile::tempdir;

    use super::*;
    use crate::{
        storage::activity_log::{append, initialize_log},
        utils::clock::TestClock,
    };

    fn test_clock() -> TestClock {
        TestClock::starting_at(
            NaiveDate::from_ymd_opt(2024, 1, 1)
                .unwrap()
                .and_hms_opt(18, 0, 0)
                .unwrap(),
        )
    }

    fn record(timestamp: &str, path: &str, summary: &str) -> ActivityRecord {
        ActivityRecord {
            timestamp: timestamp.into(),
            screenshot_path: path.into(),
            summary: summary.into(),
        }
    }

    #[test]
    fn lists_entries_in_log_order() -> Result<()> {
        let dir = tempdir()?;
        let log_path = dir.path().join("activity_log.csv");
        initialize_log(&log_path)?;
        append(&log_path, record("2024-01-01 10:00:00", "/a.png", "Wrote code"))?;
        append(&log_path, record("2024-01-01 10:15:00", "/b.png", "Read email"))?;

        let report = generate_report(&log_path, dir.path(), &test_clock())?
            .expect("Report should be written");

        assert_eq!(report, dir.path().join("report_2024-01-01_18-00-00.txt"));
        let contents = fs::read_to_string(&report)?;
        let mut lines = contents.lines();
        assert_eq!(lines.next(), Some(REPORT_TITLE));
        assert!(lines.next().is_some_and(|l| l.starts_with("Generated on: 2024-01-01 18:00:00.")));
        assert_eq!(lines.next(), Some(""));
        assert_eq!(lines.next(), Some("- 2024-01-01 10:00:00: Wrote code"));
        assert_eq!(lines.next(), Some("- 2024-01-01 10:15:00: Read email"));
        assert_eq!(lines.next(), None);
        Ok(())
    }

    #[test]
    fn empty_log_writes_nothing() -> Result<()> {
        let dir = tempdir()?;
        let log_path = dir.path().join("activity_log.csv");
        initialize_log(&log_path)?;

        assert_eq!(generate_report(&log_path, dir.path(), &test_clock())?, None);
        assert_eq!(fs::read_dir(dir.path())?.count(), 1);
        Ok(())
    }

    #[test]
    fn missing_log_writes_nothing() -> Result<()> {
        let dir = tempdir()?;

        let report = generate_report(&dir.path().join("absent.csv"), dir.path(), &test_clock())?;

        assert_eq!(report, None);
        assert_eq!(fs::read_dir(dir.path())?.count(), 0);
        Ok(())
    }

    #[test]
    fn render_has_no_trailing_newline() {
        let rendered = render_report(
            &[record("2024-01-01 10:00:00", "/a.png", "Wrote code")],
            "2024-01-01 18:00:00.000000",
        );

        assert_eq!(
            rendered,
            "=== Productivity Report ===\n\
             Generated on: 2024-01-01 18:00:00.000000\n\
             \n\
             - 2024-01-01 10:00:00: Wrote code"
        );
    }
}
