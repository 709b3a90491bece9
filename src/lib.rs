//! # Patternlog
//!
//! A lightweight logging library built around named logger configurations:
//! application code obtains a named [`Logger`] from a [`LoggersConfig`], calls
//! a leveled method, and the library renders the configuration's message
//! pattern and fans the line out to every enabled output.
//!
//! ## Features
//!
//! - **Pattern-based formatting**: `%TIME%`, `%NAME%` and `%LEVEL%`
//!   placeholders around a mandatory `%MSG%` insertion point
//! - **Multiple outputs**: a process-wide shared console sink and
//!   per-configuration file sinks with flush-per-write durability
//! - **Layered filtering**: a registry-wide kill-switch, a per-configuration
//!   enable flag, and a minimal level, all re-checked on every call
//! - **Thread safe**: synchronous delivery with guarded sinks and registry
//!
//! ## Quick start
//!
//! ```
//! use patternlog::prelude::*;
//!
//! # fn main() -> patternlog::Result<()> {
//! let registry = LoggingRegistry::new();
//! let config = LoggersConfig::builder("app")
//!     .enable_loggers(true)
//!     .message_pattern("%TIME% [%LEVEL%] %NAME%: %MSG%")
//!     .minimal_level(LogLevel::Info)
//!     .build(&registry)?;
//!
//! let logger = config.logger("app::server")?;
//! logger.info("server started");
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod macros;
pub mod outputs;

pub mod prelude {
    pub use crate::core::{
        ConfigBuilder, LogLevel, Logger, LoggerError, LoggersConfig, LoggingRegistry,
        MessagePattern, PatternModifier, Result, TimeFormat, DEFAULT_LOG_MESSAGE_PATTERN,
        MSG_TOKEN,
    };
    pub use crate::outputs::{ConsoleOutput, FileOutput, LogOutput};
}

pub use crate::core::{
    ConfigBuilder, LogLevel, Logger, LoggerError, LoggersConfig, LoggingRegistry, MessagePattern,
    PatternModifier, Result, TimeFormat, DEFAULT_LOG_MESSAGE_PATTERN, MSG_TOKEN,
};
pub use crate::outputs::{ConsoleOutput, FileOutput, LogOutput};
