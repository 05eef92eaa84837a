use crate::ports::clock::ClockPort;
use chrono::{DateTime, Local};

#[derive(Debug, Clone, Copy)]
pub struct Clock;

impl Clock {
    pub fn new() -> Self {
        Self
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

impl ClockPort for Clock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}
