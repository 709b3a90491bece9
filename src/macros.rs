//! Logging macros for formatted messages
//!
//! The `format!`-interpolating counterparts of the plain level methods. Each
//! macro consults [`Logger::level_enabled`](crate::Logger::level_enabled)
//! before formatting, so a filtered-out call never pays for building the
//! message.
//!
//! # Examples
//!
//! ```
//! use patternlog::prelude::*;
//! use patternlog::info;
//!
//! # fn main() -> patternlog::Result<()> {
//! let registry = LoggingRegistry::new();
//! let config = LoggersConfig::builder("macros-doc")
//!     .enable_loggers(true)
//!     .build(&registry)?;
//! let logger = config.logger("server")?;
//!
//! let port = 8080;
//! info!(logger, "listening on port {}", port);
//! # Ok(())
//! # }
//! ```

/// Log a formatted message at an explicit level.
///
/// ```
/// # use patternlog::prelude::*;
/// # let registry = LoggingRegistry::new();
/// # let config = LoggersConfig::builder("log-macro-doc").enable_loggers(true).build(&registry).unwrap();
/// # let logger = config.logger("doc").unwrap();
/// use patternlog::log;
/// log!(logger, LogLevel::Info, "request handled");
/// log!(logger, LogLevel::Error, "error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {{
        let logger = &$logger;
        if logger.level_enabled($level) {
            logger.log($level, &format!($($arg)+));
        }
    }};
}

/// Log a formatted trace-level message.
#[macro_export]
macro_rules! trace {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Trace, $($arg)+)
    };
}

/// Log a formatted debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log a formatted info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a formatted warning-level message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Log a formatted error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a formatted fatal-level message.
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Fatal, $($arg)+)
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{LogLevel, LoggersConfig, LoggingRegistry};
    use std::sync::Arc;

    fn quiet_config(name: &str) -> Arc<LoggersConfig> {
        let registry = LoggingRegistry::new();
        LoggersConfig::builder(name)
            .console_output(false)
            .enable_loggers(true)
            .build(&registry)
            .unwrap()
    }

    #[test]
    fn test_log_macro() {
        let config = quiet_config("macro-log");
        let logger = config.logger("svc").unwrap();
        log!(logger, LogLevel::Info, "plain message");
        log!(logger, LogLevel::Info, "formatted: {}", 42);
    }

    #[test]
    fn test_level_macros() {
        let config = quiet_config("macro-levels");
        let logger = config.logger("svc").unwrap();
        trace!(logger, "trace {}", 1);
        debug!(logger, "debug {}", 2);
        info!(logger, "info {}", 3);
        warn!(logger, "warn {}", 4);
        error!(logger, "error {}", 5);
        fatal!(logger, "fatal {}", 6);
    }

    #[test]
    fn test_filtered_call_skips_formatting() {
        struct Exploding;
        impl std::fmt::Display for Exploding {
            fn fmt(&self, _f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                panic!("formatted a filtered-out message");
            }
        }

        let registry = LoggingRegistry::new();
        let config = LoggersConfig::builder("macro-filtered")
            .console_output(false)
            .enable_loggers(true)
            .minimal_level(LogLevel::Error)
            .build(&registry)
            .unwrap();
        let logger = config.logger("svc").unwrap();

        // Below the minimal level: the Display impl must never run.
        debug!(logger, "value: {}", Exploding);
    }
}
