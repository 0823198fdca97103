use chrono::{DateTime, TimeZone};

/// Format used inside the activity log and the report entries.
pub const RECORD_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Filesystem friendly variant, used for screenshot and report names.
pub const FILE_TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

pub fn record_timestamp<Tz: TimeZone>(time: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    time.format(RECORD_TIMESTAMP_FORMAT).to_string()
}

pub fn file_timestamp<Tz: TimeZone>(time: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    time.format(FILE_TIMESTAMP_FORMAT).to_string()
}

/// Timestamp with microseconds, printed in the report header.
pub fn precise_timestamp<Tz: TimeZone>(time: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    time.format("%Y-%m-%d %H:%M:%S%.6f").to_string()
}
