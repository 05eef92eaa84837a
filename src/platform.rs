/// Platform - Dependency injection container for the console and clock ports.
///
/// `Platform::new()` wires the adapters of the current target; tests swap
/// in the in-memory ones with `with_adapters`.

use crate::adapters::{Clock, Console};
use crate::ports::{ClockPort, ConsolePort};
use std::sync::Arc;

#[derive(Clone)]
pub struct Platform {
    console: Arc<dyn ConsolePort>,
    clock: Arc<dyn ClockPort>,
}

impl Platform {
    /// Creates a new Platform with default adapters for the current target.
    pub fn new() -> Self {
        Self::with_adapters(Arc::new(Console::new()), Arc::new(Clock::new()))
    }

    pub fn with_adapters(console: Arc<dyn ConsolePort>, clock: Arc<dyn ClockPort>) -> Self {
        Self { console, clock }
    }

    #[inline]
    pub fn console(&self) -> &Arc<dyn ConsolePort> {
        &self.console
    }

    #[inline]
    pub fn clock(&self) -> &Arc<dyn ClockPort> {
        &self.clock
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{FixedClock, MemoryConsole};
    use crate::domain::Level;

    #[test]
    fn test_platform_creation() {
        let platform = Platform::new();
        platform.console().write(Level::Debug, "MyLog", "[Platform] test");
    }

    #[test]
    fn test_platform_clone_shares_adapters() {
        let console = Arc::new(MemoryConsole::new());
        let platform = Platform::with_adapters(console.clone(), Arc::new(FixedClock::default()));
        let cloned = platform.clone();
        cloned.console().write(Level::Info, "MyLog", "[Platform] clone");

        assert_eq!(console.len(), 1);
        assert_eq!(platform.clock().now(), cloned.clock().now());
    }

    #[test]
    fn test_platform_default() {
        let platform = Platform::default();
        platform.console().write(Level::Debug, "MyLog", "[Platform] default");
    }
}
