//! Output sinks for formatted log lines

pub mod console;
pub mod file;

pub use console::ConsoleOutput;
pub use file::FileOutput;

use crate::core::error::Result;

/// A destination that durably receives fully formatted log lines.
///
/// Methods take `&self` and implementations guard their write path internally,
/// so a sink can be shared across configurations behind an `Arc`.
pub trait LogOutput: Send + Sync {
    /// Deliver one line. The implementation appends the line terminator.
    fn out(&self, line: &str) -> Result<()>;

    /// Release any owned resources. Sinks that own a resource reject writes
    /// after close.
    fn close(&self) -> Result<()>;

    fn name(&self) -> &str;
}
