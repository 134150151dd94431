//! Formatting utilities for long listings: permissions, sizes, and dates.

use chrono::{DateTime, Local};

use crate::config::{FILE_OWNER, SIZE_COLUMN_WIDTH};

/// Permission string derived solely from the entry kind.
pub fn format_permissions(is_dir: bool) -> &'static str {
    if is_dir { "drwxr-xr-x" } else { "-rw-r--r--" }
}

/// One `ls -l` row: permissions, owner, group, size, date, name.
pub fn format_long_entry(is_dir: bool, size: u64, date: &str, name: &str) -> String {
    format!(
        "{} {} {} {:>width$} {} {}",
        format_permissions(is_dir),
        FILE_OWNER,
        FILE_OWNER,
        size,
        date,
        name,
        width = SIZE_COLUMN_WIDTH
    )
}

/// Format a wall-clock timestamp for terminal display (e.g. "Jan  5 12:34").
///
/// `timestamp` is read as-is, with no zone conversion. The session clock
/// already supplies local wall-clock seconds (see [`local_now`]).
pub fn format_date_short(timestamp: u64) -> String {
    i64::try_from(timestamp)
        .ok()
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
        .unwrap_or(DateTime::UNIX_EPOCH)
        .format("%b %e %H:%M")
        .to_string()
}

/// Local wall-clock time as seconds since the epoch.
///
/// This is UTC seconds shifted by the local zone offset, so formatting it
/// without a zone shows the hour the user's clock shows. A clock set before
/// 1970 reads as the epoch itself.
pub fn local_now() -> u64 {
    let now = Local::now();
    let wall = now.timestamp() + i64::from(now.offset().local_minus_utc());
    u64::try_from(wall).unwrap_or(0)
}
