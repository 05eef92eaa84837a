use crate::domain::Level;
use crate::ports::ConsolePort;
use std::io::{self, Write};

/// Native console implementation using stderr.
///
/// Prints `L/TAG: line`, the brief format of logcat, so output from a
/// desktop run reads the same as on a device.
#[derive(Debug, Clone, Copy)]
pub struct StderrConsole;

impl StderrConsole {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StderrConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsolePort for StderrConsole {
    fn write(&self, level: Level, process_tag: &str, line: &str) {
        // the stderr lock keeps the line whole under concurrent writers
        let mut stderr = io::stderr().lock();
        let _ = writeln!(stderr, "{}/{}: {}", level.as_char(), process_tag, line);
    }
}
