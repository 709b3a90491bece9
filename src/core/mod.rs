//! Core types: levels, patterns, modifiers, configurations, loggers

pub mod config;
pub mod error;
pub mod level;
pub mod logger;
pub mod modifier;
pub mod pattern;
pub mod registry;
pub mod time_format;
pub mod validate;

pub use config::{ConfigBuilder, LoggersConfig};
pub use error::{LoggerError, Result};
pub use level::LogLevel;
pub use logger::Logger;
pub use modifier::{PatternModifier, LEVEL_TOKEN, NAME_TOKEN, TIME_TOKEN};
pub use pattern::{MessagePattern, MSG_TOKEN};
pub use registry::{LoggingRegistry, DEFAULT_LOG_MESSAGE_PATTERN};
pub use time_format::TimeFormat;
