pub mod configuration;
pub mod error;
pub mod format;
pub mod level;

pub use configuration::LogConfiguration;
pub use error::{LogError, LogResult};
pub use level::Level;
