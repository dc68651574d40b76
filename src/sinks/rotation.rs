//! Rotation configuration and increment selection
//!
//! The rotation set is a bounded family of files `{folder}/{name}_{i}.log`,
//! `0 <= i < max_count`, each at most `max_bytes`. Selection has two phases:
//! a one-time search for a resumable increment, then a pure next-index walk
//! that wraps around and reclaims the oldest slot.

use crate::core::error::{LoggerError, Result};
use fs2::FileExt;
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

/// Default maximum size of one log file: 50 MiB.
pub const DEFAULT_MAX_BYTES: u64 = 50 * 1024 * 1024;

/// Default number of files in the rotation set.
pub const DEFAULT_MAX_COUNT: u32 = 10;

fn default_max_bytes() -> u64 {
    DEFAULT_MAX_BYTES
}

fn default_max_count() -> u32 {
    DEFAULT_MAX_COUNT
}

/// Default log folder: a `log` directory beside the running executable,
/// falling back to a relative `log` directory when the executable path is
/// unavailable.
pub fn default_folder() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
        .join("log")
}

/// Immutable configuration of one rotation set.
///
/// # Examples
///
/// ```
/// use rotolog::sinks::RotationConfig;
///
/// let config = RotationConfig::new("svc")
///     .with_folder("/tmp/svc-logs")
///     .with_max_bytes(10 * 1024 * 1024)
///     .with_max_count(5);
/// assert_eq!(config.name(), "svc");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotationConfig {
    name: String,
    #[serde(default = "default_folder")]
    folder: PathBuf,
    #[serde(default = "default_max_bytes")]
    max_bytes: u64,
    #[serde(default = "default_max_count")]
    max_count: u32,
}

impl RotationConfig {
    /// Create a configuration with the default folder and limits.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            folder: default_folder(),
            max_bytes: DEFAULT_MAX_BYTES,
            max_count: DEFAULT_MAX_COUNT,
        }
    }

    #[must_use = "builder methods return a new value and do not modify the original"]
    pub fn with_folder(mut self, folder: impl Into<PathBuf>) -> Self {
        self.folder = folder.into();
        self
    }

    #[must_use = "builder methods return a new value and do not modify the original"]
    pub fn with_max_bytes(mut self, max_bytes: u64) -> Self {
        self.max_bytes = max_bytes;
        self
    }

    #[must_use = "builder methods return a new value and do not modify the original"]
    pub fn with_max_count(mut self, max_count: u32) -> Self {
        self.max_count = max_count;
        self
    }

    /// Check the configuration invariants: non-blank name, positive limits.
    ///
    /// # Errors
    ///
    /// Returns `LoggerError::InvalidConfiguration` describing the first
    /// violated invariant.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(LoggerError::config(
                "RotationConfig",
                "log name must not be empty",
            ));
        }
        if self.max_bytes == 0 {
            return Err(LoggerError::config(
                "RotationConfig",
                "max_bytes must be greater than zero",
            ));
        }
        if self.max_count == 0 {
            return Err(LoggerError::config(
                "RotationConfig",
                "max_count must be at least 1",
            ));
        }
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn folder(&self) -> &Path {
        &self.folder
    }

    pub fn max_bytes(&self) -> u64 {
        self.max_bytes
    }

    pub fn max_count(&self) -> u32 {
        self.max_count
    }

    /// Path of the rotation-set member with the given increment.
    pub fn increment_path(&self, increment: u32) -> PathBuf {
        self.folder.join(format!("{}_{}.log", self.name, increment))
    }
}

/// Mutable selection state of one rotation set.
///
/// `established` records whether the one-time search for a resumable
/// increment has completed; afterwards selection is purely next-index.
#[derive(Debug, Clone, Default)]
pub struct RotationState {
    pub current_increment: u32,
    pub established: bool,
    pub current_path: Option<PathBuf>,
}

impl RotationState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Check whether another process holds the file open exclusively.
///
/// The probe takes and immediately releases an advisory exclusive lock; no
/// lock is held for the lifetime of writing, so this is collision avoidance,
/// not coordination. Missing files are reported as not in use; files that
/// cannot be opened at all are treated as in use.
fn is_file_in_use(path: &Path) -> bool {
    if !path.exists() {
        return false;
    }

    match OpenOptions::new().read(true).write(true).open(path) {
        Ok(file) => {
            if file.try_lock_exclusive().is_ok() {
                let _ = fs2::FileExt::unlock(&file);
                false
            } else {
                true
            }
        }
        Err(_) => true,
    }
}

/// Select the next file of the rotation set, updating `state`.
///
/// First selection scans increments in ascending order for an absent file or
/// an unfilled, unlocked one; if none qualifies it wraps to increment 0.
/// Subsequent selections take `(current + 1) % max_count`. In both wrap cases
/// the target slot's previous content is deleted before use - rotation
/// sacrifices old content at that slot.
///
/// # Errors
///
/// Fails only if the target folder cannot be created.
pub fn select_next_file(state: &mut RotationState, config: &RotationConfig) -> Result<PathBuf> {
    fs::create_dir_all(config.folder()).map_err(|e| {
        LoggerError::rotation(
            config.folder().display().to_string(),
            format!("cannot create log folder: {}", e),
        )
    })?;

    if !state.established {
        // One-time search: nearest unfilled file to resume, or nearest
        // unused increment to start fresh.
        state.established = true;

        for i in 0..config.max_count() {
            let candidate = config.increment_path(i);

            if candidate.exists() {
                let size = fs::metadata(&candidate).map(|m| m.len()).unwrap_or(u64::MAX);
                if size < config.max_bytes() && !is_file_in_use(&candidate) {
                    state.current_increment = i;
                    return Ok(candidate);
                }
            } else {
                state.current_increment = i;
                return Ok(candidate);
            }
        }

        // Full house: start over from the top.
        state.current_increment = 0;
    } else {
        state.current_increment = (state.current_increment + 1) % config.max_count();
    }

    // Reclaim the slot. Deletion is best effort; a failure here degrades to
    // appending the existing file rather than failing the selection.
    let target = config.increment_path(state.current_increment);
    if target.exists() {
        let _ = fs::remove_file(&target);
    }
    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn config(dir: &Path, max_bytes: u64, max_count: u32) -> RotationConfig {
        RotationConfig::new("svc")
            .with_folder(dir)
            .with_max_bytes(max_bytes)
            .with_max_count(max_count)
    }

    #[test]
    fn test_config_defaults() {
        let config = RotationConfig::new("svc");
        assert_eq!(config.max_bytes(), 50 * 1024 * 1024);
        assert_eq!(config.max_count(), 10);
    }

    #[test]
    fn test_config_validation() {
        assert!(RotationConfig::new("svc").validate().is_ok());
        assert!(RotationConfig::new("  ").validate().is_err());
        assert!(RotationConfig::new("svc").with_max_bytes(0).validate().is_err());
        assert!(RotationConfig::new("svc").with_max_count(0).validate().is_err());
    }

    #[test]
    fn test_increment_path_layout() {
        let config = RotationConfig::new("svc").with_folder("/tmp/x");
        assert_eq!(config.increment_path(3), PathBuf::from("/tmp/x/svc_3.log"));
    }

    #[test]
    fn test_first_selection_picks_lowest_absent() {
        let dir = tempdir().unwrap();
        let config = config(dir.path(), 100, 4);
        let mut state = RotationState::new();

        let path = select_next_file(&mut state, &config).unwrap();
        assert_eq!(path, config.increment_path(0));
        assert_eq!(state.current_increment, 0);
        assert!(state.established);
    }

    #[test]
    fn test_first_selection_resumes_unfilled_file() {
        let dir = tempdir().unwrap();
        let config = config(dir.path(), 100, 4);

        fs::write(config.increment_path(0), "x".repeat(100)).unwrap(); // full
        fs::write(config.increment_path(1), "x".repeat(10)).unwrap(); // unfilled

        let mut state = RotationState::new();
        let path = select_next_file(&mut state, &config).unwrap();
        assert_eq!(path, config.increment_path(1));
        assert_eq!(state.current_increment, 1);
        // Resumed file keeps its content.
        assert_eq!(fs::metadata(&path).unwrap().len(), 10);
    }

    #[test]
    fn test_first_selection_skips_full_files() {
        let dir = tempdir().unwrap();
        let config = config(dir.path(), 100, 4);

        fs::write(config.increment_path(0), "x".repeat(150)).unwrap();
        fs::write(config.increment_path(1), "x".repeat(100)).unwrap();

        let mut state = RotationState::new();
        let path = select_next_file(&mut state, &config).unwrap();
        assert_eq!(path, config.increment_path(2));
    }

    #[test]
    fn test_first_selection_full_house_wraps_to_zero() {
        let dir = tempdir().unwrap();
        let config = config(dir.path(), 100, 3);

        for i in 0..3 {
            fs::write(config.increment_path(i), "x".repeat(100)).unwrap();
        }

        let mut state = RotationState::new();
        let path = select_next_file(&mut state, &config).unwrap();
        assert_eq!(path, config.increment_path(0));
        assert_eq!(state.current_increment, 0);
        // The reclaimed slot's previous content is gone.
        assert!(!path.exists());
    }

    #[test]
    fn test_subsequent_selection_advances_and_deletes() {
        let dir = tempdir().unwrap();
        let config = config(dir.path(), 100, 3);

        fs::write(config.increment_path(1), "old content").unwrap();

        let mut state = RotationState {
            current_increment: 0,
            established: true,
            current_path: Some(config.increment_path(0)),
        };

        let path = select_next_file(&mut state, &config).unwrap();
        assert_eq!(path, config.increment_path(1));
        assert_eq!(state.current_increment, 1);
        assert!(!path.exists());
    }

    #[test]
    fn test_subsequent_selection_wraps_around() {
        let dir = tempdir().unwrap();
        let config = config(dir.path(), 100, 3);

        let mut state = RotationState {
            current_increment: 2,
            established: true,
            current_path: Some(config.increment_path(2)),
        };

        let path = select_next_file(&mut state, &config).unwrap();
        assert_eq!(path, config.increment_path(0));
        assert_eq!(state.current_increment, 0);
    }

    #[test]
    fn test_selection_creates_missing_folder() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let config = config(&nested, 100, 3);

        let mut state = RotationState::new();
        let path = select_next_file(&mut state, &config).unwrap();
        assert!(nested.is_dir());
        assert_eq!(path, config.increment_path(0));
    }

    #[test]
    fn test_in_use_probe_on_locked_file() {
        use fs2::FileExt;

        let dir = tempdir().unwrap();
        let config = config(dir.path(), 100, 3);
        let locked = config.increment_path(0);
        fs::write(&locked, "x".repeat(10)).unwrap();

        let holder = OpenOptions::new().read(true).write(true).open(&locked).unwrap();
        holder.lock_exclusive().unwrap();

        // Increment 0 is unfilled but held; selection moves past it.
        let mut state = RotationState::new();
        let path = select_next_file(&mut state, &config).unwrap();
        assert_eq!(path, config.increment_path(1));

        fs2::FileExt::unlock(&holder).unwrap();
    }
}
