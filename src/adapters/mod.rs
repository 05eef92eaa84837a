/// Adapters module - platform-specific implementations of ports.
///
/// The console adapter for the current target is selected at compile time
/// and exported as `Console`.

pub mod memory;
pub mod native;
pub mod shared;

#[cfg(target_os = "android")]
pub mod android;
#[cfg(target_arch = "wasm32")]
pub mod wasm;

#[cfg(target_os = "android")]
pub use android::Logcat as Console;
#[cfg(target_arch = "wasm32")]
pub use wasm::BrowserConsole as Console;
#[cfg(not(any(target_os = "android", target_arch = "wasm32")))]
pub use native::StderrConsole as Console;

pub use native::Clock;
pub use shared::DualSink;
