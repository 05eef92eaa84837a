use crate::domain::Level;
use crate::ports::ConsolePort;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console, js_name = debug)]
    fn console_debug(s: &str);

    #[wasm_bindgen(js_namespace = console, js_name = info)]
    fn console_info(s: &str);

    #[wasm_bindgen(js_namespace = console, js_name = warn)]
    fn console_warn(s: &str);

    #[wasm_bindgen(js_namespace = console, js_name = error)]
    fn console_error(s: &str);
}

#[derive(Debug, Clone, Copy)]
pub struct BrowserConsole;

impl BrowserConsole {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BrowserConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsolePort for BrowserConsole {
    fn write(&self, level: Level, process_tag: &str, line: &str) {
        let text = format!("{process_tag}: {line}");
        match level {
            Level::Verbose | Level::Debug => console_debug(&text),
            Level::Info => console_info(&text),
            Level::Warn => console_warn(&text),
            Level::Error | Level::Fatal => console_error(&text),
        }
    }
}
