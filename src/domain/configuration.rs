use crate::domain::error::{LogError, LogResult};
use std::env;
use std::fs::{File, OpenOptions};
use std::path::Path;

#[cfg(unix)]
use std::os::fd::OwnedFd;

pub const ENV_PROCESS_TAG: &str = "MYLOG_PROCESS_TAG";
pub const ENV_LOG_FILE: &str = "MYLOG_FILE";

/// Stores values for logging subsystem configuration.
///
/// Built once at startup and handed to `init` by value: the optional log
/// file moves into the sink, which becomes its sole owner.
#[derive(Debug)]
pub struct LogConfiguration {
    process_tag: String,
    log_file: Option<File>,
}

impl LogConfiguration {
    pub fn new(process_tag: impl Into<String>) -> Self {
        Self {
            process_tag: process_tag.into(),
            log_file: None,
        }
    }

    /// Builds a configuration from `MYLOG_PROCESS_TAG` and the optional
    /// `MYLOG_FILE`, loading a `.env` file first when one is present.
    pub fn from_env() -> LogResult<Self> {
        dotenv::dotenv().ok();

        let process_tag =
            env::var(ENV_PROCESS_TAG).map_err(|_| LogError::MissingEnv(ENV_PROCESS_TAG))?;
        let mut configuration = Self::new(process_tag);

        if let Ok(path) = env::var(ENV_LOG_FILE) {
            configuration.set_log_file(Self::open_log_file(&path)?);
            log::debug!("log file {path} taken from {ENV_LOG_FILE}");
        }

        configuration.validate()?;
        Ok(configuration)
    }

    /// Opens `path` for appending, creating it if needed.
    pub fn open_log_file(path: impl AsRef<Path>) -> LogResult<File> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(file)
    }

    /// Points logs to a file where they are written in addition to the console.
    pub fn with_log_file(mut self, file: File) -> Self {
        self.set_log_file(file);
        self
    }

    pub fn set_log_file(&mut self, file: File) {
        self.log_file = Some(file);
    }

    /// Detaches the log file, e.g. to reuse it with a corrected configuration.
    pub fn take_log_file(&mut self) -> Option<File> {
        self.log_file.take()
    }

    /// Adopts a raw descriptor handed over by the host (e.g. a detached
    /// `ParcelFileDescriptor`). The descriptor is closed by the sink.
    #[cfg(unix)]
    pub fn with_log_fd(self, fd: OwnedFd) -> Self {
        self.with_log_file(File::from(fd))
    }

    pub fn process_tag(&self) -> &str {
        &self.process_tag
    }

    pub fn has_log_file(&self) -> bool {
        self.log_file.is_some()
    }

    /// Checks the configuration without consuming it, so a caller can fix
    /// a rejected one while still owning the log file.
    pub fn validate(&self) -> LogResult<()> {
        if self.process_tag.is_empty() {
            return Err(LogError::EmptyProcessTag);
        }
        Ok(())
    }

    pub(crate) fn into_parts(self) -> (String, Option<File>) {
        (self.process_tag, self.log_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_path(name: &str) -> std::path::PathBuf {
        env::temp_dir().join(format!("mylog_cfg_{}_{}", std::process::id(), name))
    }

    #[test]
    fn test_new_configuration_has_no_file() {
        let configuration = LogConfiguration::new("MyLog");
        assert_eq!(configuration.process_tag(), "MyLog");
        assert!(!configuration.has_log_file());
        assert!(configuration.validate().is_ok());
    }

    #[test]
    fn test_empty_process_tag_is_rejected() {
        let configuration = LogConfiguration::new("");
        assert!(matches!(
            configuration.validate(),
            Err(LogError::EmptyProcessTag)
        ));
    }

    #[test]
    fn test_rejected_configuration_keeps_log_file() {
        let path = temp_path("rejected.log");
        let file = LogConfiguration::open_log_file(&path).unwrap();
        let mut configuration = LogConfiguration::new("").with_log_file(file);
        assert!(configuration.validate().is_err());

        let file = configuration.take_log_file().unwrap();
        assert!(!configuration.has_log_file());
        let retried = LogConfiguration::new("MyLog").with_log_file(file);
        assert!(retried.validate().is_ok());
        assert!(retried.has_log_file());
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_attach_log_file() {
        let path = temp_path("attach.log");
        let file = LogConfiguration::open_log_file(&path).unwrap();
        let configuration = LogConfiguration::new("MyLog").with_log_file(file);
        assert!(configuration.has_log_file());

        let (tag, file) = configuration.into_parts();
        assert_eq!(tag, "MyLog");
        file.unwrap().write_all(b"line\n").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "line\n");
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_open_log_file_appends() {
        let path = temp_path("append.log");
        std::fs::write(&path, "first\n").unwrap();
        let mut file = LogConfiguration::open_log_file(&path).unwrap();
        file.write_all(b"second\n").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "first\nsecond\n");
        std::fs::remove_file(&path).unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn test_with_log_fd() {
        let path = temp_path("fd.log");
        let fd = OwnedFd::from(LogConfiguration::open_log_file(&path).unwrap());
        let configuration = LogConfiguration::new("MyLog").with_log_fd(fd);
        assert!(configuration.has_log_file());
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_from_env() {
        let path = temp_path("env.log");
        env::set_var(ENV_PROCESS_TAG, "EnvTag");
        env::set_var(ENV_LOG_FILE, &path);

        let configuration = LogConfiguration::from_env().unwrap();
        assert_eq!(configuration.process_tag(), "EnvTag");
        assert!(configuration.has_log_file());

        env::remove_var(ENV_PROCESS_TAG);
        env::remove_var(ENV_LOG_FILE);
        assert!(matches!(
            LogConfiguration::from_env(),
            Err(LogError::MissingEnv(ENV_PROCESS_TAG))
        ));
        std::fs::remove_file(&path).unwrap();
    }
}
