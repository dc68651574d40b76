//! # Rotolog
//!
//! A rotating, buffered file-logging engine with a bounded on-disk footprint.
//!
//! ## Features
//!
//! - **Bounded footprint**: size- and count-limited rotation over a fixed
//!   family of `{name}_{i}.log` files
//! - **Safe before open**: lines logged before a file exists are buffered in
//!   order and flushed on the first `open()`
//! - **Collision avoidance**: the initial file selection skips increments
//!   held open by another process
//! - **Thread safe**: any number of threads share one logger behind a single
//!   lock; file and console output never interleave mid-line

pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        ComponentLogger, Log, LogLevel, LogLine, Logger, LoggerError, LoggerRegistry,
        PendingBuffer, Result,
    };
    pub use crate::sinks::{
        ConsoleMirror, RotatingWriter, RotationConfig, RotationState, DEFAULT_MAX_BYTES,
        DEFAULT_MAX_COUNT, SESSION_SEPARATOR,
    };
}

pub use crate::core::{
    ComponentLogger, Log, LogLevel, LogLine, Logger, LoggerError, LoggerRegistry, PendingBuffer,
    Result,
};
pub use crate::sinks::{
    ConsoleMirror, RotatingWriter, RotationConfig, RotationState, DEFAULT_MAX_BYTES,
    DEFAULT_MAX_COUNT, SESSION_SEPARATOR,
};
