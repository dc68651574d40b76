//! Core logger types and traits

pub mod component;
pub mod error;
pub mod formatter;
pub mod log;
pub mod log_level;
pub mod logger;
pub mod pending;
pub mod registry;

pub use component::ComponentLogger;
pub use error::{LoggerError, Result};
pub use formatter::LogLine;
pub use log::Log;
pub use log_level::LogLevel;
pub use logger::Logger;
pub use pending::PendingBuffer;
pub use registry::LoggerRegistry;
