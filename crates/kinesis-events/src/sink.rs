//! Output sinks for the running order report and command output.

use tracing::info;

/// Receives text the generator wants surfaced to the user.
pub trait OutputSink: Send {
    fn emit(&mut self, text: &str);
}

/// Emits every text as an `info` event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl OutputSink for TracingSink {
    fn emit(&mut self, text: &str) {
        info!("{}", text);
    }
}

/// Keeps emitted text in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    lines: Vec<String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl OutputSink for MemorySink {
    fn emit(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }
}
