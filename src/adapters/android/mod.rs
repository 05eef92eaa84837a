/// Android adapters - logcat console through liblog.

pub mod logcat;

pub use logcat::Logcat;
