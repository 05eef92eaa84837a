/// Logging module - per-tag logger registry and the build-mode selection.
///
/// Non-production builds use `LoggerRegistry`, which dispatches to the sink.
/// Building with the `noop` feature swaps in `NoopLogging`, whose loggers
/// compile away. Both expose `LogFacility`, so call sites are identical.

#[macro_use]
mod macros;

pub mod bridge;
pub mod dispatch;
pub mod facility;
pub mod global;
pub mod logger;
pub mod noop;
pub mod registry;

pub use bridge::{install_log_bridge, LogBridge};
pub use dispatch::DispatchLogger;
pub use facility::LogFacility;
pub use global::{get_logger, get_logger_for, init, logging};
pub use logger::Logger;
pub use noop::{NoopLogger, NoopLogging};
pub use registry::LoggerRegistry;

#[cfg(not(feature = "noop"))]
pub type Logging = LoggerRegistry;
#[cfg(feature = "noop")]
pub type Logging = NoopLogging;

/// Logger type handed out by the process-wide `Logging`.
pub type LoggerHandle = <Logging as LogFacility>::Logger;

/// False in no-op builds; the `log_*!` macros skip formatting when unset.
pub const ENABLED: bool = cfg!(not(feature = "noop"));
