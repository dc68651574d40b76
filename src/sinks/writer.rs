//! Rotating file writer
//!
//! Owns the single open file handle of a rotation set, tracks its size and
//! reopens through increment selection when the size threshold is reached.

use crate::core::error::{LoggerError, Result};
use crate::core::formatter::LogLine;
use crate::sinks::rotation::{self, RotationConfig, RotationState};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Marker line written at the start of every file-open event, demarcating
/// session boundaries within a reused file.
pub const SESSION_SEPARATOR: &str = "########################################";

pub struct RotatingWriter {
    config: RotationConfig,
    state: RotationState,
    file: Option<File>,
    current_size: u64,
}

impl RotatingWriter {
    pub fn new(config: RotationConfig) -> Self {
        Self {
            config,
            state: RotationState::new(),
            file: None,
            current_size: 0,
        }
    }

    /// Open the next file of the rotation set, closing any currently open one.
    ///
    /// Writes the session separator and primes the size counter from file
    /// metadata, so a resumed file accounts for its prior content.
    ///
    /// # Errors
    ///
    /// Fails if the folder cannot be created or the selected file cannot be
    /// opened or written.
    pub fn open(&mut self) -> Result<()> {
        if self.file.is_some() {
            self.close();
        }

        let path = rotation::select_next_file(&mut self.state, &self.config)?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| {
                LoggerError::file_sink(path.display().to_string(), format!("Failed to open: {}", e))
            })?;

        writeln!(file, "{}", SESSION_SEPARATOR).map_err(|e| {
            LoggerError::file_sink(
                path.display().to_string(),
                format!("Failed to write session separator: {}", e),
            )
        })?;

        self.current_size = file.metadata().map(|m| m.len()).unwrap_or(0);
        self.state.current_path = Some(path);
        self.file = Some(file);
        Ok(())
    }

    /// Whether the active file has reached the size threshold.
    pub fn needs_rotation(&self) -> bool {
        self.current_size >= self.config.max_bytes()
    }

    /// Append one formatted line to the open file.
    ///
    /// The write goes straight to the file handle; the size counter is
    /// updated in the same critical section the caller already holds, so the
    /// size observed by the next caller reflects this write.
    ///
    /// # Errors
    ///
    /// Fails if no file is open or the write fails.
    pub fn append(&mut self, line: &LogLine) -> Result<()> {
        let file = self
            .file
            .as_mut()
            .ok_or_else(|| LoggerError::writer("no log file is open"))?;

        writeln!(file, "{}", line.text()).map_err(|e| {
            LoggerError::file_sink(
                self.state
                    .current_path
                    .as_deref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default(),
                format!("Failed to write log line: {}", e),
            )
        })?;

        self.current_size += line.byte_len();
        Ok(())
    }

    /// Flush and release the file handle.
    ///
    /// Errors are swallowed; the return value reports whether the final sync
    /// succeeded. Callers that need durability must check it.
    pub fn close(&mut self) -> bool {
        self.state.current_path = None;
        match self.file.take() {
            Some(file) => file.sync_all().is_ok(),
            None => true,
        }
    }

    pub fn is_open(&self) -> bool {
        self.file.is_some()
    }

    pub fn current_size_bytes(&self) -> u64 {
        self.current_size
    }

    pub fn current_path(&self) -> Option<&Path> {
        self.state.current_path.as_deref()
    }

    pub fn current_increment(&self) -> u32 {
        self.state.current_increment
    }

    pub fn config(&self) -> &RotationConfig {
        &self.config
    }

    /// Resolved path the writer would use for the given increment.
    pub fn increment_path(&self, increment: u32) -> PathBuf {
        self.config.increment_path(increment)
    }
}

impl Drop for RotatingWriter {
    fn drop(&mut self) {
        if let Some(file) = self.file.take() {
            let _ = file.sync_all();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::formatter::LogLine;
    use crate::core::log_level::LogLevel;
    use std::fs;
    use tempfile::tempdir;

    fn line(text: &str) -> LogLine {
        LogLine::new(text.to_string(), LogLevel::Info)
    }

    fn writer(dir: &Path, max_bytes: u64, max_count: u32) -> RotatingWriter {
        RotatingWriter::new(
            RotationConfig::new("svc")
                .with_folder(dir)
                .with_max_bytes(max_bytes)
                .with_max_count(max_count),
        )
    }

    #[test]
    fn test_open_writes_separator() {
        let dir = tempdir().unwrap();
        let mut writer = writer(dir.path(), 1000, 3);

        writer.open().unwrap();
        let path = writer.current_path().unwrap().to_path_buf();
        assert!(writer.close());

        let content = fs::read_to_string(path).unwrap();
        assert_eq!(content, format!("{}\n", SESSION_SEPARATOR));
    }

    #[test]
    fn test_separator_is_forty_chars() {
        assert_eq!(SESSION_SEPARATOR.len(), 40);
        assert!(SESSION_SEPARATOR.chars().all(|c| c == '#'));
    }

    #[test]
    fn test_append_requires_open_file() {
        let dir = tempdir().unwrap();
        let mut writer = writer(dir.path(), 1000, 3);
        assert!(writer.append(&line("orphan")).is_err());
    }

    #[test]
    fn test_size_counter_tracks_writes() {
        let dir = tempdir().unwrap();
        let mut writer = writer(dir.path(), 1000, 3);

        writer.open().unwrap();
        let after_open = writer.current_size_bytes();
        assert_eq!(after_open, SESSION_SEPARATOR.len() as u64 + 1);

        writer.append(&line("0123456789")).unwrap();
        assert_eq!(writer.current_size_bytes(), after_open + 11);

        // The counter agrees with the bytes on disk.
        let on_disk = fs::metadata(writer.current_path().unwrap()).unwrap().len();
        assert_eq!(writer.current_size_bytes(), on_disk);
    }

    #[test]
    fn test_needs_rotation_at_threshold() {
        let dir = tempdir().unwrap();
        let mut writer = writer(dir.path(), 60, 3);

        writer.open().unwrap();
        assert!(!writer.needs_rotation());

        writer.append(&line("0123456789012345678")).unwrap(); // 20 bytes
        assert!(writer.current_size_bytes() >= 60);
        assert!(writer.needs_rotation());
    }

    #[test]
    fn test_reopen_advances_increment() {
        let dir = tempdir().unwrap();
        let mut writer = writer(dir.path(), 60, 3);

        writer.open().unwrap();
        assert_eq!(writer.current_increment(), 0);

        writer.open().unwrap();
        assert_eq!(writer.current_increment(), 1);
        assert_eq!(
            writer.current_path().unwrap(),
            writer.increment_path(1).as_path()
        );
    }

    #[test]
    fn test_resumed_file_accounts_existing_content() {
        let dir = tempdir().unwrap();
        let config = RotationConfig::new("svc")
            .with_folder(dir.path())
            .with_max_bytes(1000)
            .with_max_count(3);
        fs::write(config.increment_path(0), "previous session\n").unwrap();

        let mut writer = RotatingWriter::new(config);
        writer.open().unwrap();

        let expected = "previous session\n".len() as u64 + SESSION_SEPARATOR.len() as u64 + 1;
        assert_eq!(writer.current_size_bytes(), expected);
    }

    #[test]
    fn test_close_clears_path_and_reports_success() {
        let dir = tempdir().unwrap();
        let mut writer = writer(dir.path(), 1000, 3);

        writer.open().unwrap();
        assert!(writer.is_open());
        assert!(writer.close());
        assert!(!writer.is_open());
        assert!(writer.current_path().is_none());

        // Closing an already-closed writer is still a success.
        assert!(writer.close());
    }
}
