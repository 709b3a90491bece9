//! File output implementation

use super::LogOutput;
use crate::core::error::{LoggerError, Result};
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// File sink owned by exactly one configuration.
///
/// Every `out` call writes the line and flushes before returning, so a
/// delivered line is on disk even if the process dies right after. Writes after
/// [`close`](LogOutput::close) fail with [`LoggerError::OutputClosed`].
pub struct FileOutput {
    path: PathBuf,
    writer: Mutex<Option<BufWriter<File>>>,
}

impl std::fmt::Debug for FileOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileOutput")
            .field("path", &self.path)
            .finish()
    }
}

impl FileOutput {
    /// Open `path` for logging. `append` keeps existing content; otherwise the
    /// file is truncated on open.
    pub fn create(path: impl Into<PathBuf>, append: bool) -> Result<Self> {
        let path = path.into();
        let mut options = OpenOptions::new();
        options.create(true);
        if append {
            options.append(true);
        } else {
            options.write(true).truncate(true);
        }
        let file = options
            .open(&path)
            .map_err(|e| LoggerError::io(format!("opening log file '{}'", path.display()), e))?;
        Ok(Self {
            path,
            writer: Mutex::new(Some(BufWriter::new(file))),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LogOutput for FileOutput {
    fn out(&self, line: &str) -> Result<()> {
        let mut guard = self.writer.lock();
        let writer = guard
            .as_mut()
            .ok_or_else(|| LoggerError::output_closed(self.path.display().to_string()))?;
        writeln!(writer, "{}", line)
            .and_then(|()| writer.flush())
            .map_err(|e| LoggerError::io(format!("writing log file '{}'", self.path.display()), e))
    }

    fn close(&self) -> Result<()> {
        // Taking the writer releases the handle when this scope ends.
        match self.writer.lock().take() {
            Some(mut writer) => writer.flush().map_err(|e| {
                LoggerError::io(format!("closing log file '{}'", self.path.display()), e)
            }),
            None => Ok(()),
        }
    }

    fn name(&self) -> &str {
        "file"
    }
}

impl Drop for FileOutput {
    fn drop(&mut self) {
        if let Some(writer) = self.writer.get_mut().as_mut() {
            let _ = writer.flush();
        }
    }
}
