/// In-memory adapters used to verify the logging core without an OS log daemon.

pub mod clock;
pub mod console;
pub mod sink;

pub use clock::FixedClock;
pub use console::{ConsoleLine, MemoryConsole};
pub use sink::{MemorySink, WrittenLine};
