//! Logger facade
//!
//! The public surface over the rotating writer, the pending buffer and the
//! console mirror. One mutex per logger instance serializes every public
//! operation end to end, including the size check, the file write and the
//! console mirror write.

use super::error::Result;
use super::formatter;
use super::log::Log;
use super::log_level::LogLevel;
use super::pending::PendingBuffer;
use crate::sinks::console::ConsoleMirror;
use crate::sinks::rotation::RotationConfig;
use crate::sinks::writer::RotatingWriter;
use parking_lot::Mutex;
use std::path::{Path, PathBuf};

struct Inner {
    writer: RotatingWriter,
    pending: PendingBuffer,
    console: ConsoleMirror,
}

impl Inner {
    /// Open (or rotate to) the next file and flush the pending buffer into
    /// it, in original order. Buffered lines reach the console only here, not
    /// at buffer time.
    fn open_file(&mut self) -> Result<()> {
        self.writer.open()?;
        for line in self.pending.drain() {
            self.console.write(&line);
            self.writer.append(&line)?;
        }
        Ok(())
    }

    fn emit(&mut self, line: formatter::LogLine) -> Result<()> {
        if !self.writer.is_open() {
            self.pending.push(line);
            return Ok(());
        }

        if self.writer.needs_rotation() {
            self.open_file()?;
        }

        self.console.write(&line);
        self.writer.append(&line)
    }
}

/// A rotating, buffered file logger.
///
/// Until [`open`](Logger::open) is called, formatted lines accumulate in
/// memory; the first open selects a file increment, writes the session
/// separator and flushes the buffer. Once a file is open, every write is
/// size-checked and may rotate to the next increment.
///
/// # Examples
///
/// ```no_run
/// use rotolog::{Logger, LogLevel, RotationConfig};
///
/// let logger = Logger::new(RotationConfig::new("svc")).unwrap();
/// logger.log("starting up", LogLevel::Info); // buffered
/// logger.open().unwrap();                    // buffer lands in svc_0.log
/// logger.info("ready");
/// assert!(logger.close());
/// ```
pub struct Logger {
    config: RotationConfig,
    inner: Mutex<Inner>,
}

impl Logger {
    /// Create a logger in buffering mode.
    ///
    /// The configuration is validated and the log folder created here, so
    /// configuration errors fail fast rather than surfacing on first write.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for a blank name or zero limits, or an
    /// IO error if the folder cannot be created.
    pub fn new(config: RotationConfig) -> Result<Self> {
        Self::with_console(config, ConsoleMirror::new())
    }

    /// Create a logger with an explicit console mirror configuration.
    pub fn with_console(config: RotationConfig, console: ConsoleMirror) -> Result<Self> {
        config.validate()?;
        std::fs::create_dir_all(config.folder()).map_err(|e| {
            super::error::LoggerError::io_operation(
                "creating log folder",
                format!("cannot create directory '{}'", config.folder().display()),
                e,
            )
        })?;

        Ok(Self {
            inner: Mutex::new(Inner {
                writer: RotatingWriter::new(config.clone()),
                pending: PendingBuffer::new(),
                console,
            }),
            config,
        })
    }

    /// Record a message at the given level.
    ///
    /// Blank messages are a no-op. IO failures are swallowed: delivery is
    /// best effort and never crashes the caller.
    pub fn log(&self, message: &str, level: LogLevel) {
        self.log_scoped(None, message, level);
    }

    pub(crate) fn log_scoped(&self, component: Option<&str>, message: &str, level: LogLevel) {
        if message.trim().is_empty() {
            return;
        }

        let line = formatter::format(level, component, message);
        let mut inner = self.inner.lock();
        let _ = inner.emit(line);
    }

    /// Record an error at ERROR level.
    ///
    /// Always emits the error's own text; a second line carries the supplied
    /// message when it is non-blank. Both lines land under one lock
    /// acquisition so they stay adjacent in the file.
    pub fn log_error(&self, error: &dyn std::error::Error, message: &str) {
        self.log_error_scoped(None, error, message);
    }

    pub(crate) fn log_error_scoped(
        &self,
        component: Option<&str>,
        error: &dyn std::error::Error,
        message: &str,
    ) {
        let error_line = formatter::format(LogLevel::Error, component, &error.to_string());
        let message_line = if message.trim().is_empty() {
            None
        } else {
            Some(formatter::format(LogLevel::Error, component, message))
        };

        let mut inner = self.inner.lock();
        let _ = inner.emit(error_line);
        if let Some(line) = message_line {
            let _ = inner.emit(line);
        }
    }

    /// Establish (or rotate to) a target file and flush buffered lines.
    ///
    /// # Errors
    ///
    /// Fails if the folder cannot be created or the selected file cannot be
    /// opened or written.
    pub fn open(&self) -> Result<()> {
        self.inner.lock().open_file()
    }

    /// Release the target file.
    ///
    /// Returns whether the final flush succeeded; errors are swallowed.
    /// Writes after `close` re-enter buffering mode and land in the file
    /// selected by the next `open` call.
    pub fn close(&self) -> bool {
        self.inner.lock().writer.close()
    }

    pub fn is_open(&self) -> bool {
        self.inner.lock().writer.is_open()
    }

    pub fn name(&self) -> &str {
        self.config.name()
    }

    pub fn folder(&self) -> &Path {
        self.config.folder()
    }

    pub fn max_bytes(&self) -> u64 {
        self.config.max_bytes()
    }

    pub fn max_count(&self) -> u32 {
        self.config.max_count()
    }

    /// Path of the currently open file, if any.
    pub fn current_path(&self) -> Option<PathBuf> {
        self.inner.lock().writer.current_path().map(Path::to_path_buf)
    }

    pub fn current_increment(&self) -> u32 {
        self.inner.lock().writer.current_increment()
    }

    #[inline]
    pub fn info(&self, message: &str) {
        self.log(message, LogLevel::Info);
    }

    #[inline]
    pub fn debug(&self, message: &str) {
        self.log(message, LogLevel::Debug);
    }

    #[inline]
    pub fn warn(&self, message: &str) {
        self.log(message, LogLevel::Warn);
    }

    #[inline]
    pub fn error(&self, message: &str) {
        self.log(message, LogLevel::Error);
    }

    #[inline]
    pub fn critical(&self, message: &str) {
        self.log(message, LogLevel::Critical);
    }
}

impl Log for Logger {
    fn log(&self, message: &str, level: LogLevel) {
        Logger::log(self, message, level);
    }

    fn log_error(&self, error: &dyn std::error::Error, message: &str) {
        Logger::log_error(self, error, message);
    }

    fn open(&self) -> Result<()> {
        Logger::open(self)
    }

    fn close(&self) -> bool {
        Logger::close(self)
    }
}
