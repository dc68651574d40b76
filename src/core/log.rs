//! The logging capability trait

use super::error::Result;
use super::log_level::LogLevel;

/// The one polymorphic capability set shared by every logger shape.
///
/// Component scoping is a decorator over the same trait rather than a
/// parallel interface hierarchy.
pub trait Log: Send + Sync {
    /// Record a message at the given level. Blank messages are a no-op.
    fn log(&self, message: &str, level: LogLevel);

    /// Record an error at ERROR level: one line for the error's own text and,
    /// only when `message` is non-blank, a second line for it.
    fn log_error(&self, error: &dyn std::error::Error, message: &str);

    /// Establish (or rotate to) a target file and flush buffered lines.
    fn open(&self) -> Result<()>;

    /// Release the target file. Returns whether the final flush succeeded.
    fn close(&self) -> bool;
}
