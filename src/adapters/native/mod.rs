/// Native adapters - implementations for desktop and CI builds.

pub mod clock;
pub mod console;

pub use clock::Clock;
pub use console::StderrConsole;
