use crate::adapters::DualSink;
use crate::domain::format::display_tag;
use crate::domain::{LogConfiguration, LogError, LogResult};
use crate::logging::dispatch::DispatchLogger;
use crate::logging::facility::LogFacility;
use crate::ports::SinkPort;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

const INITIAL_CAPACITY: usize = 128;

/// Logging implementation for non-production builds.
///
/// Caches one `DispatchLogger` per display tag for the lifetime of the
/// registry. Lookup and insertion happen under a single lock, so a logger
/// is constructed at most once per tag even when callers race.
pub struct LoggerRegistry {
    sink: Arc<dyn SinkPort>,
    initialized: AtomicBool,
    loggers: Mutex<HashMap<String, Arc<DispatchLogger>>>,
}

impl LoggerRegistry {
    pub fn new(sink: Arc<dyn SinkPort>) -> Self {
        Self {
            sink,
            initialized: AtomicBool::new(false),
            loggers: Mutex::new(HashMap::with_capacity(INITIAL_CAPACITY)),
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized.load(Ordering::Acquire)
    }

    /// Number of distinct tags handed out so far.
    pub fn len(&self) -> usize {
        self.loggers.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.loggers.lock().is_empty()
    }
}

impl Default for LoggerRegistry {
    fn default() -> Self {
        Self::new(Arc::new(DualSink::default()))
    }
}

impl LogFacility for LoggerRegistry {
    type Logger = Arc<DispatchLogger>;

    fn init(&self, configuration: LogConfiguration) -> LogResult<()> {
        // an invalid configuration leaves the once-flag unclaimed
        configuration.validate()?;
        if self
            .initialized
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(LogError::AlreadyInitialized);
        }

        let (process_tag, log_file) = configuration.into_parts();
        self.sink.init(&process_tag, log_file)
    }

    fn get_logger(&self, tag: &str) -> Arc<DispatchLogger> {
        let key = display_tag(tag);
        let mut loggers = self.loggers.lock();
        let logger = loggers.entry(key).or_insert_with_key(|key| {
            Arc::new(DispatchLogger::new(key.clone(), Arc::clone(&self.sink)))
        });
        Arc::clone(logger)
    }
}
