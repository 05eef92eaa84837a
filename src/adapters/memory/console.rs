use crate::domain::Level;
use crate::ports::ConsolePort;
use parking_lot::Mutex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleLine {
    pub level: Level,
    pub process_tag: String,
    pub line: String,
}

/// In-memory console that keeps every line written to it.
#[derive(Debug, Default)]
pub struct MemoryConsole {
    lines: Mutex<Vec<ConsoleLine>>,
}

impl MemoryConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<ConsoleLine> {
        self.lines.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lines.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.lock().is_empty()
    }
}

impl ConsolePort for MemoryConsole {
    fn write(&self, level: Level, process_tag: &str, line: &str) {
        self.lines.lock().push(ConsoleLine {
            level,
            process_tag: process_tag.to_owned(),
            line: line.to_owned(),
        });
    }
}
