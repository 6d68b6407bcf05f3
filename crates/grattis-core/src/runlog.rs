//! Append-only run log.
//!
//! Every outcome of a run is appended to a plain-text file as a
//! bordered block and echoed to stdout. The file is opened once per run
//! and held for its duration; each entry is flushed before the call
//! returns, so an entry that was recorded is on disk even if the
//! process dies right after.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

use crate::error::Result;

/// Default log file, created in the working directory on first open.
pub const DEFAULT_LOG_PATH: &str = "log.log";

const SEPARATOR_WIDTH: usize = 20;

/// Log severity. Selects the separator character of the block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Error,
}

impl Severity {
    fn separator(self) -> char {
        match self {
            Severity::Info => '-',
            Severity::Error => '*',
        }
    }
}

/// Shared append-only run log.
///
/// Entries look like:
///
/// ```text
/// --------------------
/// 2026-06-15 08:00:02.123456
/// Generated message for Anna: ...
/// --------------------
/// ```
///
/// with `*` borders for errors.
pub struct RunLog {
    file: Mutex<File>,
}

impl RunLog {
    /// Open the log file at `path` in append mode, creating it if
    /// absent.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            file: Mutex::new(file),
        })
    }

    pub fn info(&self, message: &str) {
        self.record(Severity::Info, message);
    }

    pub fn error(&self, message: &str) {
        self.record(Severity::Error, message);
    }

    /// Append one bordered block and echo the raw message to stdout.
    /// Logging is best effort: a write failure goes to stderr and never
    /// aborts the run.
    pub fn record(&self, severity: Severity, message: &str) {
        let border = severity.separator().to_string().repeat(SEPARATOR_WIDTH);
        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.6f");
        let block = format!("{border}\n{timestamp}\n{message}\n{border}\n");

        match self.file.lock() {
            Ok(mut file) => {
                if let Err(e) = file.write_all(block.as_bytes()).and_then(|()| file.flush()) {
                    tracing::error!("run log write failed: {e}");
                }
            }
            Err(_) => tracing::error!("run log lock poisoned, dropping entry: {message}"),
        }

        println!("{message}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_temp() -> (tempfile::TempDir, RunLog, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("run.log");
        let log = RunLog::open(&path).unwrap();
        (dir, log, path)
    }

    #[test]
    fn test_file_created_on_open() {
        let (_dir, _log, path) = open_temp();
        assert!(path.exists());
    }

    #[test]
    fn test_info_block_format() {
        let (_dir, log, path) = open_temp();
        log.info("hello there");

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "-".repeat(20));
        assert_eq!(lines[2], "hello there");
        assert_eq!(lines[3], "-".repeat(20));
        // timestamp line looks like a date
        assert!(lines[1].starts_with("20"), "unexpected timestamp: {}", lines[1]);
    }

    #[test]
    fn test_error_block_uses_star_border() {
        let (_dir, log, path) = open_temp();
        log.error("boom");

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with(&"*".repeat(20)));
        assert!(content.contains("boom"));
    }

    #[test]
    fn test_blocks_append() {
        let (_dir, log, path) = open_temp();
        log.info("first");
        log.error("second");
        log.info("third");

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.matches("-".repeat(20).as_str()).count(), 4);
        assert_eq!(content.matches("*".repeat(20).as_str()).count(), 2);
        let first = content.find("first").unwrap();
        let second = content.find("second").unwrap();
        let third = content.find("third").unwrap();
        assert!(first < second && second < third);
    }

    #[test]
    fn test_reopen_appends_instead_of_truncating() {
        let (_dir, log, path) = open_temp();
        log.info("from first run");
        drop(log);

        let log = RunLog::open(&path).unwrap();
        log.info("from second run");

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("from first run"));
        assert!(content.contains("from second run"));
    }
}
