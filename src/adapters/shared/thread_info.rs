use once_cell::sync::Lazy;

static PROCESS_ID: Lazy<u32> = Lazy::new(os_process_id);

thread_local! {
    static THREAD_ID: i64 = os_thread_id();
}

#[cfg(not(target_arch = "wasm32"))]
fn os_process_id() -> u32 {
    std::process::id()
}

#[cfg(target_arch = "wasm32")]
fn os_process_id() -> u32 {
    0
}

#[cfg(any(target_os = "linux", target_os = "android"))]
fn os_thread_id() -> i64 {
    // SAFETY: gettid takes no arguments and cannot fail.
    unsafe { libc::syscall(libc::SYS_gettid) as i64 }
}

#[cfg(not(any(target_os = "linux", target_os = "android")))]
fn os_thread_id() -> i64 {
    use std::sync::atomic::{AtomicI64, Ordering};

    static NEXT_THREAD_ID: AtomicI64 = AtomicI64::new(1);
    NEXT_THREAD_ID.fetch_add(1, Ordering::Relaxed)
}

pub fn process_id() -> u32 {
    *PROCESS_ID
}

/// Kernel thread id of the caller, resolved once per thread.
pub fn current_thread_id() -> i64 {
    THREAD_ID.with(|id| *id)
}
