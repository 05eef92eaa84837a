use crate::ports::ClockPort;
use chrono::{DateTime, Local, TimeZone};

/// Clock frozen at a given instant, for reproducible file records.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    now: DateTime<Local>,
}

impl FixedClock {
    pub fn new(now: DateTime<Local>) -> Self {
        Self { now }
    }
}

impl Default for FixedClock {
    fn default() -> Self {
        let now = Local
            .with_ymd_and_hms(2024, 1, 15, 12, 30, 45)
            .earliest()
            .unwrap_or_else(Local::now);
        Self::new(now)
    }
}

impl ClockPort for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.now
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock_does_not_move() {
        let clock = FixedClock::default();
        let t1 = clock.now();
        std::thread::sleep(std::time::Duration::from_millis(5));
        assert_eq!(t1, clock.now());
    }
}
