/// Ports module - Defines the interfaces (traits) that abstract platform-specific functionality.
///
/// The logging core only talks to these traits. Adapters provide the
/// platform log daemon, the wall clock and the sink that combines them,
/// so the core can be verified against in-memory fakes.

pub mod clock;
pub mod console;
pub mod sink;

pub use clock::ClockPort;
pub use console::ConsolePort;
pub use sink::{SinkContext, SinkPort};
