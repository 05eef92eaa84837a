/// WASM adapters - browser console.

pub mod console;

pub use console::BrowserConsole;
