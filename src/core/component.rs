//! Component-scoped logger decorator

use super::error::{LoggerError, Result};
use super::log::Log;
use super::log_level::LogLevel;
use super::logger::Logger;
use std::sync::Arc;

/// A logger scoped to a named component.
///
/// Prefixes the component segment between the level tag and the message body
/// and delegates everything else to the shared parent, so any number of
/// components write through one rotation set and one lock.
///
/// # Examples
///
/// ```no_run
/// use rotolog::{ComponentLogger, Logger, RotationConfig};
/// use std::sync::Arc;
///
/// let parent = Arc::new(Logger::new(RotationConfig::new("svc")).unwrap());
/// let net = ComponentLogger::new(Arc::clone(&parent), "netcfg").unwrap();
/// net.info("adapter probe complete"); // ...|INFO|netcfg|adapter probe complete
/// ```
pub struct ComponentLogger {
    parent: Arc<Logger>,
    component: String,
}

impl ComponentLogger {
    /// Create a component-scoped view over `parent`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the component name is blank.
    pub fn new(parent: Arc<Logger>, component: impl Into<String>) -> Result<Self> {
        let component = component.into();
        if component.trim().is_empty() {
            return Err(LoggerError::config(
                "ComponentLogger",
                "component name must not be empty",
            ));
        }
        Ok(Self { parent, component })
    }

    pub fn component(&self) -> &str {
        &self.component
    }

    pub fn parent(&self) -> &Arc<Logger> {
        &self.parent
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

impl Log for ComponentLogger {
    fn log(&self, message: &str, level: LogLevel) {
        self.parent.log_scoped(Some(&self.component), message, level);
    }

    fn log_error(&self, error: &dyn std::error::Error, message: &str) {
        self.parent
            .log_error_scoped(Some(&self.component), error, message);
    }

    fn open(&self) -> Result<()> {
        self.parent.open()
    }

    fn close(&self) -> bool {
        self.parent.close()
    }
}
