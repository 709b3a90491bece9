//! Loggers configuration
//!
//! A configuration is the aggregate root of this library: it owns the enabled
//! outputs, the message pattern, the modifier set derived from that pattern,
//! the minimal level, and the cache of named loggers. Developers can create
//! many configurations for different environments or subsystems, all sharing
//! one registry.

use super::error::{LoggerError, Result};
use super::level::LogLevel;
use super::logger::Logger;
use super::modifier::PatternModifier;
use super::pattern::{self, MessagePattern};
use super::registry::{LoggingRegistry, DEFAULT_LOG_MESSAGE_PATTERN};
use super::time_format::TimeFormat;
use super::validate;
use crate::outputs::{ConsoleOutput, FileOutput, LogOutput};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Per-environment configuration for a set of named loggers.
///
/// Constructed once via [`ConfigBuilder`] and read-mostly afterwards. The name
/// is immutable and unique within the owning registry; outputs fan out in the
/// order they were enabled.
///
/// # Examples
///
/// ```
/// use patternlog::prelude::*;
///
/// # fn main() -> patternlog::Result<()> {
/// let registry = LoggingRegistry::new();
/// let config = LoggersConfig::builder("docs-config-example")
///     .enable_loggers(true)
///     .message_pattern("[%LEVEL%] %NAME%: %MSG%")
///     .minimal_level(LogLevel::Info)
///     .build(&registry)?;
///
/// let logger = config.logger("docs")?;
/// logger.info("configured");
/// # Ok(())
/// # }
/// ```
pub struct LoggersConfig {
    name: String,
    registry: Arc<LoggingRegistry>,
    loggers_enabled: AtomicBool,
    console_output_enabled: bool,
    file_output_enabled: bool,
    use_canonical_names: bool,
    minimal_level: LogLevel,
    pattern: MessagePattern,
    modifiers: Vec<PatternModifier>,
    outputs: Vec<Arc<dyn LogOutput>>,
    loggers: Mutex<HashMap<String, Arc<Logger>>>,
}

impl std::fmt::Debug for LoggersConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoggersConfig")
            .field("name", &self.name)
            .field("loggers_enabled", &self.loggers_enabled)
            .field("console_output_enabled", &self.console_output_enabled)
            .field("file_output_enabled", &self.file_output_enabled)
            .field("use_canonical_names", &self.use_canonical_names)
            .field("minimal_level", &self.minimal_level)
            .field("outputs", &self.outputs.len())
            .finish()
    }
}

impl LoggersConfig {
    /// Start building a configuration with the given unique name.
    pub fn builder(name: impl Into<String>) -> ConfigBuilder {
        ConfigBuilder::new(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn registry(&self) -> &LoggingRegistry {
        &self.registry
    }

    /// Per-configuration enable flag, AND-ed with the registry's global flag on
    /// every logging call.
    pub fn is_loggers_enabled(&self) -> bool {
        self.loggers_enabled.load(Ordering::Relaxed)
    }

    pub fn enable_loggers(&self, enabled: bool) {
        self.loggers_enabled.store(enabled, Ordering::Relaxed);
    }

    pub fn is_console_output_enabled(&self) -> bool {
        self.console_output_enabled
    }

    pub fn is_file_output_enabled(&self) -> bool {
        self.file_output_enabled
    }

    pub fn is_use_canonical_names(&self) -> bool {
        self.use_canonical_names
    }

    pub fn minimal_level(&self) -> LogLevel {
        self.minimal_level
    }

    /// The active message pattern.
    pub fn message_pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Modifiers derived from the pattern, in application order.
    pub fn modifiers(&self) -> &[PatternModifier] {
        &self.modifiers
    }

    pub(crate) fn outputs(&self) -> &[Arc<dyn LogOutput>] {
        &self.outputs
    }

    /// Fetch or create the logger registered under `name`.
    ///
    /// Lookup-or-create is idempotent: at most one logger exists per name, and
    /// repeated calls return the same instance.
    pub fn logger(self: &Arc<Self>, name: impl Into<String>) -> Result<Arc<Logger>> {
        let name = name.into();
        validate::identifier(&name, "name")?;
        let mut loggers = self.loggers.lock();
        let logger = loggers
            .entry(name)
            .or_insert_with_key(|key| Arc::new(Logger::new(self, key.clone())));
        Ok(Arc::clone(logger))
    }

    /// Fetch or create a logger named after `T`: the full type path when
    /// canonical names are enabled, the last path segment otherwise.
    pub fn logger_for_type<T: ?Sized>(self: &Arc<Self>) -> Arc<Logger> {
        let full = std::any::type_name::<T>();
        let name = if self.use_canonical_names {
            full
        } else {
            full.rsplit("::").next().unwrap_or(full)
        };
        self.logger(name).expect("type name is a valid logger name")
    }

    /// Render the final line for one call: run every active modifier over the
    /// pattern, then substitute the message into the first `%MSG%`.
    pub(crate) fn render(&self, logger_name: &str, level: LogLevel, message: &str) -> String {
        let mut decorated = self.pattern.as_str().to_string();
        for modifier in &self.modifiers {
            decorated = modifier.modify(&decorated, logger_name, level);
        }
        pattern::insert_message(&decorated, message)
    }

    /// Close every owned output, collecting per-output failures.
    ///
    /// Shutdown always completes; callers that care can inspect the returned
    /// aggregate, everyone else can drop it. The shared console sink has
    /// nothing to release and is never torn down.
    pub fn close(&self) -> Vec<LoggerError> {
        let mut failures = Vec::new();
        for output in &self.outputs {
            if let Err(e) = output.close() {
                failures.push(e);
            }
        }
        failures
    }
}

#[derive(Debug, Clone)]
struct FileOutputParams {
    path: PathBuf,
    append: bool,
}

/// Fluent parameter set for [`LoggersConfig`].
///
/// Setters are plain value assignments; all validation happens in a fixed
/// order inside [`build`](Self::build), so a rejected build leaves no partial
/// state behind.
#[derive(Debug, Clone)]
pub struct ConfigBuilder {
    name: String,
    loggers_enabled: bool,
    console_output: bool,
    file_output: Option<FileOutputParams>,
    pattern: Option<String>,
    time_format: Option<TimeFormat>,
    use_canonical_names: bool,
    minimal_level: LogLevel,
}

impl ConfigBuilder {
    /// Start a builder for a configuration named `name`.
    ///
    /// Defaults: loggers disabled, console output on, no file output, bare
    /// `%MSG%` pattern, simple type names, minimal level `Trace`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            loggers_enabled: false,
            console_output: true,
            file_output: None,
            pattern: None,
            time_format: None,
            use_canonical_names: false,
            minimal_level: LogLevel::Trace,
        }
    }

    /// Enable or disable every logger of the future configuration.
    #[must_use = "builder methods return a new value"]
    pub fn enable_loggers(mut self, enabled: bool) -> Self {
        self.loggers_enabled = enabled;
        self
    }

    /// Enable or disable the shared console output. On by default.
    #[must_use = "builder methods return a new value"]
    pub fn console_output(mut self, enabled: bool) -> Self {
        self.console_output = enabled;
        self
    }

    /// Enable file output to `path`. `append` keeps existing content;
    /// otherwise the file is truncated when the configuration is built.
    #[must_use = "builder methods return a new value"]
    pub fn file_output(mut self, path: impl Into<PathBuf>, append: bool) -> Self {
        self.file_output = Some(FileOutputParams {
            path: path.into(),
            append,
        });
        self
    }

    /// Replace the default `"%MSG%"` pattern.
    #[must_use = "builder methods return a new value"]
    pub fn message_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    /// Time format for the `%TIME%` placeholder. Attached only when the chosen
    /// pattern activates a time modifier.
    #[must_use = "builder methods return a new value"]
    pub fn time_format(mut self, format: impl Into<TimeFormat>) -> Self {
        self.time_format = Some(format.into());
        self
    }

    /// Name loggers created via [`LoggersConfig::logger_for_type`] by full type
    /// path instead of the last path segment.
    #[must_use = "builder methods return a new value"]
    pub fn use_canonical_names(mut self, use_canonical: bool) -> Self {
        self.use_canonical_names = use_canonical;
        self
    }

    /// Suppress every call below `level`.
    #[must_use = "builder methods return a new value"]
    pub fn minimal_level(mut self, level: LogLevel) -> Self {
        self.minimal_level = level;
        self
    }

    /// Build the configuration and register it with `registry`.
    ///
    /// Validation order is fixed: the name (empty, blank, duplicate) is checked
    /// before anything else, then the time format and pattern, then outputs —
    /// so a bad pattern fails before any output state changes, and file
    /// creation is the only step that can fail with an I/O error. Registration
    /// happens last; a rejected build registers nothing.
    pub fn build(self, registry: &Arc<LoggingRegistry>) -> Result<Arc<LoggersConfig>> {
        validate::identifier(&self.name, "name")?;
        if registry.contains(&self.name) {
            return Err(LoggerError::duplicate_name(&self.name));
        }

        // A blank time format is rejected even when the pattern has no %TIME%.
        if let Some(TimeFormat::Custom(format)) = &self.time_format {
            validate::identifier(format, "time format")?;
        }
        let pattern = MessagePattern::new(
            self.pattern
                .unwrap_or_else(|| DEFAULT_LOG_MESSAGE_PATTERN.to_string()),
        )?;
        let modifiers = PatternModifier::derive_for_pattern(
            pattern.as_str(),
            self.time_format.unwrap_or_default(),
        );

        let mut outputs: Vec<Arc<dyn LogOutput>> = Vec::new();
        if self.console_output {
            outputs.push(ConsoleOutput::shared());
        }
        let file_output_enabled = self.file_output.is_some();
        if let Some(params) = self.file_output {
            outputs.push(Arc::new(FileOutput::create(params.path, params.append)?));
        }

        let config = Arc::new(LoggersConfig {
            name: self.name,
            registry: Arc::clone(registry),
            loggers_enabled: AtomicBool::new(self.loggers_enabled),
            console_output_enabled: self.console_output,
            file_output_enabled,
            use_canonical_names: self.use_canonical_names,
            minimal_level: self.minimal_level,
            pattern,
            modifiers,
            outputs,
            loggers: Mutex::new(HashMap::new()),
        });
        registry.register(&config)?;
        Ok(config)
    }
}
