//! Everything the tracker keeps on disk lives under a single base directory:
//!  - `screenshots/` holds one PNG per cycle.
//!  - `reports/activity_log.csv` is the append-only [activity_log::ActivityLog].
//!  - `reports/report_<timestamp>.txt` is written once per interrupted run.

pub mod activity_log;
pub mod paths;
