//! File logging example
//!
//! Demonstrates a configuration fanning out to console and a log file, plus
//! explicit shutdown with the close-failure aggregate.
//!
//! Run with: cargo run --example file_logging

use patternlog::prelude::*;

fn main() -> Result<()> {
    let registry = LoggingRegistry::new();

    let config = LoggersConfig::builder("file-example")
        .enable_loggers(true)
        .file_output("example.log", true)
        .message_pattern("%TIME% [%LEVEL%] %NAME%: %MSG%")
        .minimal_level(LogLevel::Info)
        .build(&registry)?;

    let logger = config.logger("file-example::writer")?;

    // Each line is flushed before the call returns.
    logger.info("written to console and example.log");
    logger.warn("file writes are durable per call");

    // close() reports per-output failures instead of throwing; an empty
    // aggregate means a clean shutdown.
    let failures = config.close();
    if failures.is_empty() {
        println!("closed cleanly");
    } else {
        for failure in failures {
            eprintln!("close failure: {}", failure);
        }
    }

    Ok(())
}
