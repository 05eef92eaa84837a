//! Call-site macros taking a logger and `format!` arguments.
//!
//! The message is only built when `mylog::ENABLED` is true, so no-op builds
//! neither allocate nor evaluate the arguments.

#[macro_export]
macro_rules! log_verbose {
    ($logger:expr, $($arg:tt)+) => {{
        if $crate::ENABLED {
            $crate::Logger::verbose(&$logger, &::std::format!($($arg)+));
        }
    }};
}

#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)+) => {{
        if $crate::ENABLED {
            $crate::Logger::debug(&$logger, &::std::format!($($arg)+));
        }
    }};
}

#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)+) => {{
        if $crate::ENABLED {
            $crate::Logger::info(&$logger, &::std::format!($($arg)+));
        }
    }};
}

#[macro_export]
macro_rules! log_warn {
    ($logger:expr, $($arg:tt)+) => {{
        if $crate::ENABLED {
            $crate::Logger::warn(&$logger, &::std::format!($($arg)+));
        }
    }};
}

#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)+) => {{
        if $crate::ENABLED {
            $crate::Logger::error(&$logger, &::std::format!($($arg)+));
        }
    }};
}
