use crate::domain::Level;
use std::error::Error;
use std::sync::Arc;

/// Logging API printing `"[Tag] message"` lines under the process tag.
///
/// There are no formatting overloads: build the message with `format!` or
/// use the `log_*!` macros, which skip formatting entirely in no-op builds.
pub trait Logger: Send + Sync {
    fn verbose(&self, msg: &str);

    fn debug(&self, msg: &str);

    fn info(&self, msg: &str);

    fn warn(&self, msg: &str);

    fn error(&self, msg: &str);

    /// Logs `msg` followed by the cause and its source chain.
    fn error_with_cause(&self, msg: &str, cause: &dyn Error);

    /// Logs at a level chosen at runtime.
    fn log(&self, level: Level, msg: &str) {
        match level {
            Level::Verbose => self.verbose(msg),
            Level::Debug => self.debug(msg),
            Level::Info => self.info(msg),
            Level::Warn => self.warn(msg),
            Level::Error | Level::Fatal => self.error(msg),
        }
    }
}

impl<L: Logger + ?Sized> Logger for &L {
    #[inline(always)]
    fn verbose(&self, msg: &str) {
        (**self).verbose(msg)
    }

    #[inline(always)]
    fn debug(&self, msg: &str) {
        (**self).debug(msg)
    }

    #[inline(always)]
    fn info(&self, msg: &str) {
        (**self).info(msg)
    }

    #[inline(always)]
    fn warn(&self, msg: &str) {
        (**self).warn(msg)
    }

    #[inline(always)]
    fn error(&self, msg: &str) {
        (**self).error(msg)
    }

    #[inline(always)]
    fn error_with_cause(&self, msg: &str, cause: &dyn Error) {
        (**self).error_with_cause(msg, cause)
    }

    #[inline(always)]
    fn log(&self, level: Level, msg: &str) {
        (**self).log(level, msg)
    }
}

impl<L: Logger + ?Sized> Logger for Arc<L> {
    #[inline]
    fn verbose(&self, msg: &str) {
        (**self).verbose(msg)
    }

    #[inline]
    fn debug(&self, msg: &str) {
        (**self).debug(msg)
    }

    #[inline]
    fn info(&self, msg: &str) {
        (**self).info(msg)
    }

    #[inline]
    fn warn(&self, msg: &str) {
        (**self).warn(msg)
    }

    #[inline]
    fn error(&self, msg: &str) {
        (**self).error(msg)
    }

    #[inline]
    fn error_with_cause(&self, msg: &str, cause: &dyn Error) {
        (**self).error_with_cause(msg, cause)
    }

    #[inline]
    fn log(&self, level: Level, msg: &str) {
        (**self).log(level, msg)
    }
}
