//! Console output implementation

use super::LogOutput;
use crate::core::error::{LoggerError, Result};
use parking_lot::Mutex;
use std::io::Write;
use std::sync::{Arc, OnceLock};

static SHARED: OnceLock<Arc<ConsoleOutput>> = OnceLock::new();

/// Shared console sink.
///
/// At most one instance exists per process; every configuration that enables
/// console output holds the same `Arc`. Closing a configuration never tears
/// down the underlying stream, since the process owns stdout.
pub struct ConsoleOutput {
    // Serializes whole-line writes so concurrent loggers never interleave.
    write_lock: Mutex<()>,
}

impl ConsoleOutput {
    /// The process-wide instance, created on first request.
    pub fn shared() -> Arc<ConsoleOutput> {
        Arc::clone(SHARED.get_or_init(|| {
            Arc::new(ConsoleOutput {
                write_lock: Mutex::new(()),
            })
        }))
    }
}

impl LogOutput for ConsoleOutput {
    fn out(&self, line: &str) -> Result<()> {
        let _guard = self.write_lock.lock();
        let mut stdout = std::io::stdout().lock();
        stdout
            .write_all(line.as_bytes())
            .and_then(|()| stdout.write_all(b"\n"))
            .map_err(|e| LoggerError::io("writing to console", e))
    }

    /// Nothing to release.
    fn close(&self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_returns_single_instance() {
        let first = ConsoleOutput::shared();
        let second = ConsoleOutput::shared();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_close_is_a_no_op() {
        let console = ConsoleOutput::shared();
        assert!(console.close().is_ok());
        assert!(console.out("still writable after close").is_ok());
    }

    #[test]
    fn test_name() {
        assert_eq!(ConsoleOutput::shared().name(), "console");
    }
}
