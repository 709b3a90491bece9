//! Basic usage example
//!
//! Demonstrates building a configuration, fetching named loggers, and logging
//! at different levels with a decorated pattern.
//!
//! Run with: cargo run --example basic_usage

use patternlog::prelude::*;
use patternlog::{info, warn};

fn main() -> Result<()> {
    let registry = LoggingRegistry::new();

    let config = LoggersConfig::builder("example")
        .enable_loggers(true)
        .message_pattern("%TIME% [%LEVEL%] %NAME%: %MSG%")
        .minimal_level(LogLevel::Debug)
        .build(&registry)?;

    let logger = config.logger("example::main")?;

    logger.trace("hidden: below the minimal level");
    logger.debug("debug message");
    logger.info("info message");
    logger.warn("warning message");
    logger.error("error message");
    logger.fatal("fatal message");

    // Formatted variants skip formatting entirely when filtered out.
    let port = 8080;
    info!(logger, "listening on port {}", port);
    warn!(logger, "disk {}% full", 93);

    // The global kill-switch silences every configuration at once.
    registry.set_logging_enabled(false);
    logger.fatal("nobody hears this");
    registry.set_logging_enabled(true);
    logger.info("back on the air");

    Ok(())
}
