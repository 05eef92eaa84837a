use crate::domain::Level;

/// Console port - the system console log, keyed by a process tag.
///
/// Abstracts the platform log daemon:
/// - Android: logcat through liblog
/// - WASM: browser console API
/// - Native: standard error
///
/// A single call writes a single whole line; implementations must not let
/// concurrent calls interleave inside a line.
pub trait ConsolePort: Send + Sync {
    fn write(&self, level: Level, process_tag: &str, line: &str);
}
