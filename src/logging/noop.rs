use crate::domain::{LogConfiguration, LogError, LogResult};
use crate::logging::facility::LogFacility;
use crate::logging::logger::Logger;
use std::error::Error;

static NOOP_LOGGER: NoopLogger = NoopLogger;

/// Logger whose every call compiles away to nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLogger;

impl Logger for NoopLogger {
    #[inline(always)]
    fn verbose(&self, _msg: &str) {}

    #[inline(always)]
    fn debug(&self, _msg: &str) {}

    #[inline(always)]
    fn info(&self, _msg: &str) {}

    #[inline(always)]
    fn warn(&self, _msg: &str) {}

    #[inline(always)]
    fn error(&self, _msg: &str) {}

    #[inline(always)]
    fn error_with_cause(&self, _msg: &str, _cause: &dyn Error) {}
}

/// No-op logging implementation for production builds.
///
/// Every tag maps to the same logger. Logging to a file is rejected since
/// nothing ever reaches a sink in this mode.
#[derive(Debug, Default)]
pub struct NoopLogging;

impl NoopLogging {
    pub const fn new() -> Self {
        Self
    }
}

impl LogFacility for NoopLogging {
    type Logger = &'static NoopLogger;

    fn init(&self, configuration: LogConfiguration) -> LogResult<()> {
        if configuration.has_log_file() {
            return Err(LogError::UnsupportedConfiguration);
        }
        Ok(())
    }

    #[inline(always)]
    fn get_logger(&self, _tag: &str) -> &'static NoopLogger {
        &NOOP_LOGGER
    }
}
