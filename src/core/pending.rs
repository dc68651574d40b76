//! Pre-open line buffer
//!
//! Formatted lines produced before any target file has been established are
//! held here, in emission order, and flushed the moment a file becomes
//! available. Buffered lines live only in memory; durability requires an
//! eventual `open()` on the owning logger.

use crate::core::formatter::LogLine;

/// Ordered queue of formatted lines awaiting a file.
#[derive(Debug, Default)]
pub struct PendingBuffer {
    lines: Vec<LogLine>,
}

impl PendingBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line, preserving emission order.
    pub fn push(&mut self, line: LogLine) {
        self.lines.push(line);
    }

    /// Take every buffered line, in original order, leaving the buffer empty.
    pub fn drain(&mut self) -> Vec<LogLine> {
        std::mem::take(&mut self.lines)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
