use std::io;
use thiserror::Error;

/// Failures surfaced by logging initialization and configuration.
///
/// Writes never produce one of these: a failed write is dropped by the sink.
#[derive(Debug, Error)]
pub enum LogError {
    #[error("logging is already initialized; init must be invoked once per process")]
    AlreadyInitialized,

    #[error("logging to a file is forbidden in no-op build mode")]
    UnsupportedConfiguration,

    #[error("process tag must not be empty")]
    EmptyProcessTag,

    #[error("environment variable {0} is not set")]
    MissingEnv(&'static str),

    #[error("IO Error: {0}")]
    Io(#[from] io::Error),
}

impl LogError {
    pub fn is_already_initialized(&self) -> bool {
        matches!(self, LogError::AlreadyInitialized)
    }

    pub fn is_unsupported_configuration(&self) -> bool {
        matches!(self, LogError::UnsupportedConfiguration)
    }
}

pub type LogResult<T> = Result<T, LogError>;
