use chrono::{DateTime, Local};

/// Port for reading wall-clock time used to stamp file records
pub trait ClockPort: Send + Sync {
    /// Returns the current local time
    fn now(&self) -> DateTime<Local>;
}
