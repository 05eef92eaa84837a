use crate::domain::Level;
use crate::ports::ConsolePort;
use std::ffi::CString;
use std::os::raw::{c_char, c_int};

#[link(name = "log")]
extern "C" {
    fn __android_log_write(prio: c_int, tag: *const c_char, text: *const c_char) -> c_int;
}

/// Android console implementation writing to logcat through liblog.
#[derive(Debug, Clone, Copy)]
pub struct Logcat;

impl Logcat {
    pub fn new() -> Self {
        Self
    }
}

impl Default for Logcat {
    fn default() -> Self {
        Self::new()
    }
}

/// liblog takes C strings; interior NULs would truncate the record.
fn to_c_string(text: &str) -> CString {
    CString::new(text).unwrap_or_else(|_| {
        let stripped: Vec<u8> = text.bytes().filter(|b| *b != 0).collect();
        CString::new(stripped).unwrap_or_default()
    })
}

impl ConsolePort for Logcat {
    fn write(&self, level: Level, process_tag: &str, line: &str) {
        let tag = to_c_string(process_tag);
        let text = to_c_string(line);
        // SAFETY: both pointers are valid NUL-terminated strings for the
        // duration of the call; liblog copies them before returning.
        unsafe {
            __android_log_write(level.android_priority(), tag.as_ptr(), text.as_ptr());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_c_string_strips_nul() {
        assert_eq!(to_c_string("a\0b").as_bytes(), b"ab");
        assert_eq!(to_c_string("plain").as_bytes(), b"plain");
    }

    #[test]
    fn test_logcat_write() {
        let logcat = Logcat::new();
        logcat.write(Level::Debug, "MyLog", "[Test] test");
    }
}
