use crate::domain::format::message_with_cause;
use crate::domain::Level;
use crate::logging::logger::Logger;
use crate::ports::{SinkContext, SinkPort};
use std::cell::RefCell;
use std::error::Error;
use std::fmt;
use std::sync::Arc;

/// Capacity kept by the per-thread line buffer between calls.
const LINE_BUFFER_CAPACITY: usize = 256;

/// Buffers above this size are released after use.
const LINE_BUFFER_MAX_RETAINED: usize = 16 * 1024;

thread_local! {
    static LINE_BUFFER: RefCell<String> = RefCell::new(String::with_capacity(LINE_BUFFER_CAPACITY));
}

/// Logger bound to one display tag, forwarding every line to the sink.
///
/// The sink context is allocated once at construction and reused by every
/// write. Instances are obtained from `LoggerRegistry` and never change.
pub struct DispatchLogger {
    display_tag: String,
    sink: Arc<dyn SinkPort>,
    context: SinkContext,
}

impl DispatchLogger {
    pub(crate) fn new(display_tag: String, sink: Arc<dyn SinkPort>) -> Self {
        let context = sink.create_context(&display_tag);
        Self {
            display_tag,
            sink,
            context,
        }
    }

    /// Bracketed prefix of every line, e.g. `"[Client] "`.
    pub fn display_tag(&self) -> &str {
        &self.display_tag
    }

    pub fn context(&self) -> &SinkContext {
        &self.context
    }

    fn dispatch(&self, level: Level, msg: &str) {
        // the line is assembled in a buffer reused by every call on this
        // thread; a sink that logs from inside `write` gets a fresh one
        let reused = LINE_BUFFER.try_with(|buffer| {
            let Ok(mut line) = buffer.try_borrow_mut() else {
                return false;
            };
            line.clear();
            line.push_str(&self.display_tag);
            line.push_str(msg);
            self.sink.write(&self.context, level, &line);
            if line.capacity() > LINE_BUFFER_MAX_RETAINED {
                line.clear();
                line.shrink_to(LINE_BUFFER_CAPACITY);
            }
            true
        });

        if !matches!(reused, Ok(true)) {
            let mut line = String::with_capacity(self.display_tag.len() + msg.len());
            line.push_str(&self.display_tag);
            line.push_str(msg);
            self.sink.write(&self.context, level, &line);
        }
    }
}

impl Logger for DispatchLogger {
    fn verbose(&self, msg: &str) {
        self.dispatch(Level::Verbose, msg);
    }

    fn debug(&self, msg: &str) {
        self.dispatch(Level::Debug, msg);
    }

    fn info(&self, msg: &str) {
        self.dispatch(Level::Info, msg);
    }

    fn warn(&self, msg: &str) {
        self.dispatch(Level::Warn, msg);
    }

    fn error(&self, msg: &str) {
        self.dispatch(Level::Error, msg);
    }

    fn error_with_cause(&self, msg: &str, cause: &dyn Error) {
        self.dispatch(Level::Error, &message_with_cause(msg, cause));
    }

    fn log(&self, level: Level, msg: &str) {
        self.dispatch(level, msg);
    }
}

impl fmt::Debug for DispatchLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DispatchLogger")
            .field("display_tag", &self.display_tag)
            .field("context", &self.context.id())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::MemorySink;
    use crate::domain::LogResult;
    use parking_lot::Mutex;
    use std::fs::File;
    use std::io;

    fn logger(tag: &str) -> (DispatchLogger, Arc<MemorySink>) {
        let sink = Arc::new(MemorySink::new());
        (DispatchLogger::new(format!("[{tag}] "), sink.clone()), sink)
    }

    #[test]
    fn test_construction_allocates_one_context() {
        let (logger, sink) = logger("T");
        assert_eq!(sink.contexts_created(), 1);
        assert_eq!(logger.display_tag(), "[T] ");
        assert_eq!(logger.context().display_tag(), "[T] ");
    }

    #[test]
    fn test_debug_prefixes_display_tag() {
        let (logger, sink) = logger("T");
        logger.debug("hello");

        let lines = sink.lines();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].line, "[T] hello");
        assert_eq!(lines[0].level, Level::Debug);
        assert_eq!(lines[0].context_id, logger.context().id());
    }

    #[test]
    fn test_every_write_reuses_context() {
        let (logger, sink) = logger("T");
        for i in 0..10 {
            logger.debug(&format!("message {i}"));
        }
        assert_eq!(sink.contexts_created(), 1);
        assert!(sink
            .lines()
            .iter()
            .all(|line| line.context_id == logger.context().id()));
    }

    #[test]
    fn test_all_levels() {
        let (logger, sink) = logger("Levels");
        logger.verbose("v");
        logger.debug("d");
        logger.info("i");
        logger.warn("w");
        logger.error("e");
        logger.log(Level::Fatal, "f");

        let levels: Vec<Level> = sink.lines().iter().map(|line| line.level).collect();
        assert_eq!(
            levels,
            vec![
                Level::Verbose,
                Level::Debug,
                Level::Info,
                Level::Warn,
                Level::Error,
                Level::Fatal
            ]
        );
    }

    #[test]
    fn test_error_with_cause() {
        let (logger, sink) = logger("T");
        let cause = io::Error::new(io::ErrorKind::NotFound, "missing file");
        logger.error_with_cause("load failed", &cause);
        assert_eq!(sink.lines()[0].line, "[T] load failed: missing file");
    }

    #[test]
    fn test_empty_message() {
        let (logger, sink) = logger("T");
        logger.debug("");
        assert_eq!(sink.lines()[0].line, "[T] ");
    }

    #[test]
    fn test_consecutive_lines_do_not_leak() {
        let (logger, sink) = logger("T");
        logger.debug("a much longer first message");
        logger.debug("short");
        assert_eq!(sink.lines()[1].line, "[T] short");
    }

    #[test]
    fn test_oversized_message_is_written_whole() {
        let (logger, sink) = logger("Big");
        let msg = "x".repeat(LINE_BUFFER_MAX_RETAINED * 2);
        logger.debug(&msg);
        logger.debug("after");

        let lines = sink.lines();
        assert_eq!(lines[0].line.len(), "[Big] ".len() + msg.len());
        assert_eq!(lines[1].line, "[Big] after");
        LINE_BUFFER.with(|buffer| {
            assert!(buffer.borrow().capacity() <= LINE_BUFFER_MAX_RETAINED);
        });
    }

    /// Sink logging through another logger while it handles a write.
    struct NestingSink {
        nested: Mutex<Option<DispatchLogger>>,
        lines: Mutex<Vec<String>>,
    }

    impl SinkPort for NestingSink {
        fn init(&self, _process_tag: &str, _log_file: Option<File>) -> LogResult<()> {
            Ok(())
        }

        fn create_context(&self, display_tag: &str) -> SinkContext {
            SinkContext::new(0, display_tag)
        }

        fn write(&self, _context: &SinkContext, _level: Level, line: &str) {
            let nested = self.nested.lock().take();
            if let Some(nested) = nested {
                nested.debug("nested");
            }
            self.lines.lock().push(line.to_owned());
        }
    }

    #[test]
    fn test_write_from_inside_sink() {
        let inner = Arc::new(MemorySink::new());
        let nested = DispatchLogger::new("[Inner] ".to_owned(), inner.clone());
        let sink = Arc::new(NestingSink {
            nested: Mutex::new(Some(nested)),
            lines: Mutex::new(Vec::new()),
        });
        let logger = DispatchLogger::new("[Outer] ".to_owned(), sink.clone());

        logger.debug("hello");

        assert_eq!(*sink.lines.lock(), vec!["[Outer] hello".to_owned()]);
        assert_eq!(inner.lines()[0].line, "[Inner] nested");
    }
}
