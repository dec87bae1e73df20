use anyhow::{Context, Result};
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::Path;

/// Append-only, timestamped record of what a run did.
#[derive(Debug, Default)]
pub struct RunLog {
    file: Option<File>,
}

impl RunLog {
    /// A log that discards every message.
    pub fn disabled() -> Self {
        Self { file: None }
    }

    /// Open `path` for appending, creating parent directories as needed.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create log directory {}", parent.display())
                })?;
            }
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Failed to open log file {}", path.display()))?;

        Ok(Self { file: Some(file) })
    }

    pub fn is_enabled(&self) -> bool {
        self.file.is_some()
    }

    pub fn log(&mut self, message: &str) -> Result<()> {
        if let Some(ref mut file) = self.file {
            writeln!(
                file,
                "[{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                message
            )?;
            file.flush()?;
        }
        Ok(())
    }

    /// Like [`RunLog::log`], but a write failure only warns and disables the log.
    pub fn record(&mut self, message: &str) {
        if let Err(e) = self.log(message) {
            eprintln!("Warning: failed to write run log: {e:#}");
            self.file = None;
        }
    }
}
