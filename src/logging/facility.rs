use crate::domain::format::simple_type_name;
use crate::domain::{LogConfiguration, LogResult};
use crate::logging::logger::Logger;
use std::any::type_name;

/// Contract shared by the real and the no-op logging implementations, so
/// call sites never depend on the build mode.
pub trait LogFacility: Send + Sync {
    type Logger: Logger + Clone;

    /// Initializes the logging subsystem.
    ///
    /// Must be invoked once per process, before the first logger write.
    /// The configuration is consumed even when it is rejected, which closes
    /// its log file. Check `LogConfiguration::validate` first to keep it.
    fn init(&self, configuration: LogConfiguration) -> LogResult<()>;

    /// Provides the logger for `tag`. The same tag yields the same logger.
    fn get_logger(&self, tag: &str) -> Self::Logger;

    /// Provides the logger tagged with the simple name of `T`.
    fn get_logger_for<T: ?Sized>(&self) -> Self::Logger {
        self.get_logger(simple_type_name(type_name::<T>()))
    }
}
