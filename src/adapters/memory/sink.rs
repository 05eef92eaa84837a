use crate::domain::{Level, LogError, LogResult};
use crate::ports::{SinkContext, SinkPort};
use parking_lot::Mutex;
use std::fs::File;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenLine {
    pub context_id: u64,
    pub level: Level,
    pub line: String,
}

#[derive(Debug, Default)]
struct InitRecord {
    process_tag: Option<String>,
    log_file: Option<File>,
}

/// Fake sink backend recording every call crossing the sink boundary.
///
/// Every `init` call is counted, so callers can check they were guarded
/// upstream; only the first one is recorded.
#[derive(Debug, Default)]
pub struct MemorySink {
    init_calls: AtomicUsize,
    init: Mutex<InitRecord>,
    next_context_id: AtomicU64,
    lines: Mutex<Vec<WrittenLine>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn init_calls(&self) -> usize {
        self.init_calls.load(Ordering::SeqCst)
    }

    /// Process tag received by the first `init` call.
    pub fn process_tag(&self) -> Option<String> {
        self.init.lock().process_tag.clone()
    }

    pub fn has_log_file(&self) -> bool {
        self.init.lock().log_file.is_some()
    }

    pub fn contexts_created(&self) -> u64 {
        self.next_context_id.load(Ordering::SeqCst)
    }

    pub fn lines(&self) -> Vec<WrittenLine> {
        self.lines.lock().clone()
    }
}

impl SinkPort for MemorySink {
    fn init(&self, process_tag: &str, log_file: Option<File>) -> LogResult<()> {
        if self.init_calls.fetch_add(1, Ordering::SeqCst) > 0 {
            return Err(LogError::AlreadyInitialized);
        }
        let mut init = self.init.lock();
        init.process_tag = Some(process_tag.to_owned());
        init.log_file = log_file;
        Ok(())
    }

    fn create_context(&self, display_tag: &str) -> SinkContext {
        let id = self.next_context_id.fetch_add(1, Ordering::SeqCst);
        SinkContext::new(id, display_tag)
    }

    fn write(&self, context: &SinkContext, level: Level, line: &str) {
        self.lines.lock().push(WrittenLine {
            context_id: context.id(),
            level,
            line: line.to_owned(),
        });
    }
}
