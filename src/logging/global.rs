/// Process-wide logging context - the implementation is selected at compile
/// time by the `noop` feature.

use crate::domain::{LogConfiguration, LogResult};
use crate::logging::facility::LogFacility;
use crate::logging::{LoggerHandle, Logging};
use lazy_static::lazy_static;

lazy_static! {
    static ref LOGGING: Logging = Logging::default();
}

/// Get the process-wide logging instance.
#[inline]
pub fn logging() -> &'static Logging {
    &LOGGING
}

/// Initializes process-wide logging. Fails on the second call.
pub fn init(configuration: LogConfiguration) -> LogResult<()> {
    logging().init(configuration)
}

#[inline]
pub fn get_logger(tag: &str) -> LoggerHandle {
    logging().get_logger(tag)
}

#[inline]
pub fn get_logger_for<T: ?Sized>() -> LoggerHandle {
    logging().get_logger_for::<T>()
}
