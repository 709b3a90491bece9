//! Logger implementation

use super::config::LoggersConfig;
use super::level::LogLevel;
use std::sync::{Arc, Weak};

/// A named logger bound to one configuration.
///
/// Loggers come out of [`LoggersConfig::logger`] and are cached there, one
/// instance per name; all policy (filtering, pattern, outputs) lives in the
/// configuration. Delivery is synchronous: the filter check, the modifier
/// pipeline, and the output fan-out all run on the calling thread.
pub struct Logger {
    name: String,
    // Weak: the configuration caches its loggers, so a strong reference back
    // would keep both alive forever.
    config: Weak<LoggersConfig>,
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .finish()
    }
}

impl Logger {
    pub(crate) fn new(config: &Arc<LoggersConfig>, name: String) -> Self {
        Self {
            name,
            config: Arc::downgrade(config),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether a call at `level` would currently be delivered.
    ///
    /// Re-checks the registry's global flag and the configuration's flag on
    /// every call, so runtime toggles take effect immediately. The macros in
    /// [`crate::macros`] consult this before formatting a message.
    pub fn level_enabled(&self, level: LogLevel) -> bool {
        match self.config.upgrade() {
            Some(config) => Self::enabled_for(&config, level),
            None => false,
        }
    }

    fn enabled_for(config: &LoggersConfig, level: LogLevel) -> bool {
        config.registry().is_logging_enabled()
            && config.is_loggers_enabled()
            && level.rank() >= config.minimal_level().rank()
    }

    /// Log `message` at `level`.
    ///
    /// A filtered-out call returns before any modifier or output work happens.
    /// Delivery failures are isolated per output and reported on stderr, so one
    /// broken sink never blocks the others.
    pub fn log(&self, level: LogLevel, message: &str) {
        let Some(config) = self.config.upgrade() else {
            return;
        };
        if !Self::enabled_for(&config, level) {
            return;
        }
        let line = config.render(&self.name, level, message);
        for output in config.outputs() {
            if let Err(e) = output.out(&line) {
                eprintln!("[logger error] output '{}' failed: {}", output.name(), e);
            }
        }
    }

    #[inline]
    pub fn trace(&self, message: &str) {
        self.log(LogLevel::Trace, message);
    }

    #[inline]
    pub fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message);
    }

    #[inline]
    pub fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    #[inline]
    pub fn warn(&self, message: &str) {
        self.log(LogLevel::Warn, message);
    }

    #[inline]
    pub fn error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }

    #[inline]
    pub fn fatal(&self, message: &str) {
        self.log(LogLevel::Fatal, message);
    }
}
