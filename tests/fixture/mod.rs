//! Call-site fixture: logs from known lines of this file.

use flog::{info, Entry};

/// Logs at info level and returns the line of the logging call.
pub fn log_info(entry: &Entry<'_>) -> u32 {
    let line = line!() + 1;
    entry.info(&["from fixture".into()]);
    line
}

/// Same through the `info!` macro.
pub fn log_info_macro(entry: &Entry<'_>) -> u32 {
    let line = line!() + 1;
    info!(entry, "from fixture macro");
    line
}

/// A `#[track_caller]` wrapper passes attribution on to its own caller.
#[track_caller]
pub fn tracked_wrapper(entry: &Entry<'_>) {
    entry.warn(&["via wrapper".into()]);
}
