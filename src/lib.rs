//! Tagged debug logging to the system console log and, optionally, a file.
//!
//! ```no_run
//! use mylog::{LogConfiguration, Logger};
//!
//! mylog::init(LogConfiguration::new("MyApp")).expect("logging initialized twice");
//! let log = mylog::get_logger("Startup");
//! log.debug("ready");
//! mylog::log_debug!(log, "{} modules loaded", 12);
//! ```

// Hexagonal architecture modules
pub mod adapters;
pub mod domain;
pub mod logging;
pub mod platform;
pub mod ports;

pub use domain::{Level, LogConfiguration, LogError, LogResult};
pub use logging::{
    get_logger, get_logger_for, init, install_log_bridge, logging, DispatchLogger, LogBridge,
    LogFacility, Logger, LoggerHandle, LoggerRegistry, Logging, NoopLogger, NoopLogging, ENABLED,
};
pub use platform::Platform;
