//! Logging registry
//!
//! The registry is an explicit, caller-owned object rather than a hidden
//! global: create one per process (or one per test) and hand the `Arc` to
//! [`ConfigBuilder::build`]. It carries the global kill-switch and the set of
//! registered configuration names.
//!
//! [`ConfigBuilder::build`]: crate::core::config::ConfigBuilder::build

use super::config::LoggersConfig;
use super::error::{LoggerError, Result};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};

/// Pattern used when a configuration supplies none: the bare message.
pub const DEFAULT_LOG_MESSAGE_PATTERN: &str = "%MSG%";

/// Holder of the global logging flag and every registered configuration name.
///
/// Names stay reserved for the registry's lifetime; dropping a configuration
/// does not free its name. The registry holds configurations weakly and never
/// owns them.
pub struct LoggingRegistry {
    logging_enabled: AtomicBool,
    configs: Mutex<HashMap<String, Weak<LoggersConfig>>>,
}

impl LoggingRegistry {
    /// Create a registry with logging globally enabled.
    #[must_use]
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            logging_enabled: AtomicBool::new(true),
            configs: Mutex::new(HashMap::new()),
        })
    }

    /// Global kill-switch, re-read by every logging call so runtime toggles
    /// take effect immediately.
    pub fn is_logging_enabled(&self) -> bool {
        self.logging_enabled.load(Ordering::Relaxed)
    }

    pub fn set_logging_enabled(&self, enabled: bool) {
        self.logging_enabled.store(enabled, Ordering::Relaxed);
    }

    /// Look up a live configuration by name.
    pub fn config(&self, name: &str) -> Option<Arc<LoggersConfig>> {
        self.configs.lock().get(name).and_then(Weak::upgrade)
    }

    /// Whether `name` has ever been registered.
    pub fn contains(&self, name: &str) -> bool {
        self.configs.lock().contains_key(name)
    }

    /// Reserve the configuration's name. Check and insert happen under one
    /// lock, so two concurrent builds of the same name cannot both succeed.
    pub(crate) fn register(&self, config: &Arc<LoggersConfig>) -> Result<()> {
        let mut configs = self.configs.lock();
        let name = config.name();
        if configs.contains_key(name) {
            return Err(LoggerError::duplicate_name(name));
        }
        configs.insert(name.to_string(), Arc::downgrade(config));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::LoggersConfig;

    #[test]
    fn test_logging_enabled_by_default() {
        let registry = LoggingRegistry::new();
        assert!(registry.is_logging_enabled());
    }

    #[test]
    fn test_kill_switch_toggles() {
        let registry = LoggingRegistry::new();
        registry.set_logging_enabled(false);
        assert!(!registry.is_logging_enabled());
        registry.set_logging_enabled(true);
        assert!(registry.is_logging_enabled());
    }

    #[test]
    fn test_lookup_by_name() {
        let registry = LoggingRegistry::new();
        let config = LoggersConfig::builder("lookup")
            .console_output(false)
            .build(&registry)
            .unwrap();

        let found = registry.config("lookup").unwrap();
        assert!(Arc::ptr_eq(&config, &found));
        assert!(registry.config("unknown").is_none());
    }

    #[test]
    fn test_name_stays_reserved_after_drop() {
        let registry = LoggingRegistry::new();
        {
            let _config = LoggersConfig::builder("reserved")
                .console_output(false)
                .build(&registry)
                .unwrap();
        }

        // The configuration is gone, but the name never frees up.
        assert!(registry.contains("reserved"));
        assert!(registry.config("reserved").is_none());
        assert!(LoggersConfig::builder("reserved")
            .console_output(false)
            .build(&registry)
            .is_err());
    }
}
