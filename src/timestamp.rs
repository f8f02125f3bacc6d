//! Wall-clock timestamp formatting for log lines.

use chrono::{DateTime, Local};

/// Timestamp for the current moment, in line-decoration form.
pub fn current_timestamp() -> String {
    format_timestamp(&Local::now())
}

/// Formats a timestamp as `[H:mm:ss:fff]` — unpadded hour, milliseconds.
pub fn format_timestamp(time: &DateTime<Local>) -> String {
    format!("[{}]", time.format("%-H:%M:%S:%3f"))
}

/// Short `[H:mm:ss]` form used by flush diagnostics.
pub(crate) fn short_timestamp() -> String {
    format!("[{}]", Local::now().format("%-H:%M:%S"))
}
