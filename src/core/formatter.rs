//! Message formatting
//!
//! Builds the timestamped, leveled header for each record and aligns
//! continuation lines of multi-line messages under the header's width.

use crate::core::log_level::LogLevel;
use chrono::{DateTime, Local};

/// strftime pattern for the header timestamp, local time.
pub const TIMESTAMP_PATTERN: &str = "%Y-%m-%d--%H.%M.%S";

/// One fully formatted record: header plus body, continuation lines indented.
///
/// A `LogLine` is immutable once produced. It carries its originating level so
/// the console mirror can color it; the file sink writes only the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    text: String,
    level: LogLevel,
}

impl LogLine {
    pub fn new(text: String, level: LogLevel) -> Self {
        Self { text, level }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    /// Bytes this line occupies on disk, including the trailing newline.
    pub fn byte_len(&self) -> u64 {
        self.text.len() as u64 + 1
    }
}

/// Build the record header: `{timestamp}|{TAG}|` plus `{component}|` when the
/// emitting logger is scoped to a named component.
pub fn header(level: LogLevel, component: Option<&str>, at: DateTime<Local>) -> String {
    let mut header = format!("{}|{}|", at.format(TIMESTAMP_PATTERN), level.tag());
    if let Some(component) = component {
        if !component.trim().is_empty() {
            header.push_str(component);
            header.push('|');
        }
    }
    header
}

/// Format a message into a single `LogLine` with an explicit timestamp.
///
/// Every line of a multi-line message after the first is left-padded with
/// spaces equal to the header's character count, so continuation lines align
/// under the first character of the message body.
pub fn format_at(
    level: LogLevel,
    component: Option<&str>,
    message: &str,
    at: DateTime<Local>,
) -> LogLine {
    let header = header(level, component, at);
    let indent = header.chars().count();

    let text = if message.contains('\n') {
        let mut out = String::with_capacity(header.len() + message.len());
        out.push_str(&header);
        for (i, line) in message.split('\n').enumerate() {
            if i > 0 {
                out.push('\n');
                out.extend(std::iter::repeat(' ').take(indent));
            }
            out.push_str(line);
        }
        out
    } else {
        format!("{}{}", header, message)
    };

    LogLine::new(text, level)
}

/// Format a message into a single `LogLine` timestamped with the current
/// local time.
pub fn format(level: LogLevel, component: Option<&str>, message: &str) -> LogLine {
    format_at(level, component, message, Local::now())
}
