pub mod dual_sink;
pub mod thread_info;

pub use dual_sink::DualSink;
