//! Logger registry
//!
//! An explicit, injectable mapping of log names to shared logger instances.
//! Application start-up code owns the registry and hands it (or individual
//! loggers) to the components that need them; there is no process-wide
//! singleton, so lifetime and test isolation stay controllable.

use super::error::{LoggerError, Result};
use super::logger::Logger;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Default)]
pub struct LoggerRegistry {
    loggers: RwLock<HashMap<String, Arc<Logger>>>,
}

impl LoggerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a logger under its configured name.
    ///
    /// # Errors
    ///
    /// Fails if a logger with the same name is already registered.
    pub fn register(&self, logger: Arc<Logger>) -> Result<()> {
        let mut loggers = self.loggers.write();
        let name = logger.name().to_string();
        if loggers.contains_key(&name) {
            return Err(LoggerError::config(
                "LoggerRegistry",
                format!("a logger named '{}' is already registered", name),
            ));
        }
        loggers.insert(name, logger);
        Ok(())
    }

    /// Look up a logger by name.
    pub fn get(&self, name: &str) -> Option<Arc<Logger>> {
        self.loggers.read().get(name).cloned()
    }

    /// Remove and return a logger. The instance stays alive for any holders
    /// of previously handed-out `Arc`s.
    pub fn remove(&self, name: &str) -> Option<Arc<Logger>> {
        self.loggers.write().remove(name)
    }

    /// Names of all registered loggers, in no particular order.
    pub fn names(&self) -> Vec<String> {
        self.loggers.read().keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.loggers.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.loggers.read().is_empty()
    }
}
