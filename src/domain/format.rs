use crate::domain::level::Level;
use chrono::{DateTime, Local};
use std::error::Error;
use std::fmt::Write;

/// Minimum width reserved by logcat for the process tag column.
const LOGCAT_TAG_WIDTH: usize = 8;

/// Upper bound of the record prefix without the process tag.
const RECORD_PREFIX_LEN: usize = 36;

/// Wraps a tag into the prefix prepended to every message: `"[tag] "`.
pub fn display_tag(tag: &str) -> String {
    let mut braced = String::with_capacity(tag.len() + 3);
    braced.push('[');
    braced.push_str(tag);
    braced.push_str("] ");
    braced
}

/// Reduces a full type path such as `app::net::Client<u8>` to `Client`.
pub fn simple_type_name(type_name: &str) -> &str {
    let path = type_name.split('<').next().unwrap_or(type_name);
    path.rsplit("::").next().unwrap_or(path)
}

/// Appends the cause and its source chain to a message.
pub fn message_with_cause(msg: &str, cause: &dyn Error) -> String {
    let mut out = format!("{msg}: {cause}");
    let mut source = cause.source();
    while let Some(err) = source {
        let _ = write!(out, "\ncaused by: {err}");
        source = err.source();
    }
    out
}

/// Formats one file record in logcat "threadtime" layout:
/// `MM-DD HH:MM:SS.mmm  PID   TID L TAG     : line\n`.
pub fn format_record(
    timestamp: &DateTime<Local>,
    process_id: u32,
    thread_id: i64,
    level: Level,
    process_tag: &str,
    line: &str,
) -> String {
    let tag_len = process_tag.len().max(LOGCAT_TAG_WIDTH);
    let mut record = String::with_capacity(RECORD_PREFIX_LEN + tag_len + line.len());
    let _ = writeln!(
        record,
        "{} {:>5} {:>5} {} {:<width$}: {}",
        timestamp.format("%m-%d %H:%M:%S%.3f"),
        process_id,
        thread_id,
        level.as_char(),
        process_tag,
        line,
        width = LOGCAT_TAG_WIDTH,
    );
    record
}
