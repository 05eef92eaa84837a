use crate::adapters::shared::thread_info::{current_thread_id, process_id};
use crate::domain::format::format_record;
use crate::domain::{Level, LogError, LogResult};
use crate::platform::Platform;
use crate::ports::{ClockPort, ConsolePort, SinkContext, SinkPort};
use once_cell::sync::OnceCell;
use parking_lot::Mutex;
use std::fs::File;
use std::io::Write;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

struct SinkState {
    process_tag: String,
    file: Option<Mutex<File>>,
}

/// Sink writing every line to the console log and, when a file was
/// attached at init, appending the same line to that file.
///
/// With a file attached both writes of a record happen under one lock, so
/// the console and the file observe records in the same order.
pub struct DualSink {
    console: Arc<dyn ConsolePort>,
    clock: Arc<dyn ClockPort>,
    state: OnceCell<SinkState>,
    next_context_id: AtomicU64,
    dropped: AtomicU64,
}

impl DualSink {
    pub fn new(platform: &Platform) -> Self {
        Self {
            console: Arc::clone(platform.console()),
            clock: Arc::clone(platform.clock()),
            state: OnceCell::new(),
            next_context_id: AtomicU64::new(0),
            dropped: AtomicU64::new(0),
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.state.get().is_some()
    }

    pub fn has_log_file(&self) -> bool {
        self.state.get().is_some_and(|state| state.file.is_some())
    }

    /// Records lost to file errors or to writes issued before `init`.
    pub fn dropped_records(&self) -> u64 {
        self.dropped.load(Ordering::Relaxed)
    }

    pub fn contexts_created(&self) -> u64 {
        self.next_context_id.load(Ordering::Relaxed)
    }

    fn drop_record(&self) {
        self.dropped.fetch_add(1, Ordering::Relaxed);
    }
}

impl Default for DualSink {
    fn default() -> Self {
        Self::new(&Platform::new())
    }
}

impl SinkPort for DualSink {
    fn init(&self, process_tag: &str, log_file: Option<File>) -> LogResult<()> {
        let has_file = log_file.is_some();
        self.state
            .set(SinkState {
                process_tag: process_tag.to_owned(),
                file: log_file.map(Mutex::new),
            })
            .map_err(|_| LogError::AlreadyInitialized)?;

        log::debug!("sink initialized for process tag {process_tag:?}, file sink: {has_file}");
        Ok(())
    }

    fn create_context(&self, display_tag: &str) -> SinkContext {
        let id = self.next_context_id.fetch_add(1, Ordering::Relaxed);
        SinkContext::new(id, display_tag)
    }

    fn write(&self, _context: &SinkContext, level: Level, line: &str) {
        let Some(state) = self.state.get() else {
            self.drop_record();
            return;
        };

        let Some(file) = &state.file else {
            self.console.write(level, &state.process_tag, line);
            return;
        };

        let thread_id = current_thread_id();
        let mut file = file.lock();
        self.console.write(level, &state.process_tag, line);
        // timestamp taken under the lock so it stays close to the console one
        let record = format_record(
            &self.clock.now(),
            process_id(),
            thread_id,
            level,
            &state.process_tag,
            line,
        );
        if file.write_all(record.as_bytes()).is_err() {
            self.drop_record();
        }
    }
}
