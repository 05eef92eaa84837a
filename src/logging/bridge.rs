//! `log` facade implementation forwarding records to a logging facility.
//!
//! The record target becomes the logger tag, so `log::debug!` in module
//! `app::sync` prints `[app::sync] ...`.

use crate::domain::Level;
use crate::logging::facility::LogFacility;
use crate::logging::global::logging;
use crate::logging::logger::Logger;
use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

pub struct LogBridge<F: LogFacility + 'static> {
    facility: &'static F,
    max_level: LevelFilter,
}

impl<F: LogFacility + 'static> LogBridge<F> {
    pub fn new(facility: &'static F, max_level: LevelFilter) -> Self {
        Self {
            facility,
            max_level,
        }
    }
}

impl<F: LogFacility + 'static> Log for LogBridge<F> {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.max_level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let logger = self.facility.get_logger(record.target());
        Logger::log(&logger, Level::from(record.level()), &record.args().to_string());
    }

    fn flush(&self) {}
}

/// Routes `log` records into the process-wide logging context.
///
/// Can succeed once per process, like any `log` backend.
pub fn install_log_bridge(max_level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_boxed_logger(Box::new(LogBridge::new(logging(), max_level)))?;
    log::set_max_level(max_level);
    Ok(())
}
