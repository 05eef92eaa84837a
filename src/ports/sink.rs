use crate::domain::{Level, LogResult};
use std::fs::File;
use std::sync::Arc;

/// Per-tag writer context handed out by a sink.
///
/// A logger obtains one at construction and passes it back on every write
/// instead of resolving its tag again.
#[derive(Debug, Clone)]
pub struct SinkContext {
    id: u64,
    display_tag: Arc<str>,
}

impl SinkContext {
    pub fn new(id: u64, display_tag: &str) -> Self {
        Self {
            id,
            display_tag: Arc::from(display_tag),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn display_tag(&self) -> &str {
        &self.display_tag
    }
}

/// Sink port - the boundary between the logging core and the engine that
/// actually records lines.
///
/// The whole surface the core needs:
/// - `init`: once per process, with the process tag and an optional file
///   whose ownership moves into the sink
/// - `create_context`: allocate a writer context for a display tag
/// - `write`: record one formatted line; never fails from the caller's view
pub trait SinkPort: Send + Sync {
    fn init(&self, process_tag: &str, log_file: Option<File>) -> LogResult<()>;

    fn create_context(&self, display_tag: &str) -> SinkContext;

    fn write(&self, context: &SinkContext, level: Level, line: &str);
}
