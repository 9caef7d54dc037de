use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::config::Config;
use crate::log::console::ConsoleSink;
use crate::log::level::Level;
use crate::log::logger_config::LoggerConfig;
use crate::log::prefix;
use crate::log::report::ErrorReport;
use crate::log::sink::LogSink;

/// Default target when `log.fileLogger.file` is not configured.
pub const DEFAULT_LOG_FILE: &str = "andyLog.log";

/// Sink that appends log lines to a text file.
///
/// Every logical message is written in its own open/write/flush/close cycle,
/// so lines written before a crash stay on disk. On any I/O failure the sink
/// describes the failure through its embedded [`ConsoleSink`] and re-executes
/// the same logical call on it; the fallback shares this sink's configuration
/// so the prefixes are identical. The call always returns normally.
pub struct FileSink {
    config: LoggerConfig,
    path: PathBuf,
    fallback: ConsoleSink,
    // Serializes this instance's write path; whole multi-line calls stay
    // contiguous under concurrent callers instead of relying on OS append
    // atomicity. One lock per sink instance, never shared.
    write_lock: Mutex<()>,
}

impl FileSink {
    /// Creates a file sink named `name`, configured from the store.
    ///
    /// The target path comes from `log.fileLogger.file`, falling back to
    /// [`DEFAULT_LOG_FILE`]. The file is not touched until the first emitted
    /// message.
    #[must_use]
    pub fn new(name: Option<&str>, config: &Config) -> Self {
        let path = config
            .get_non_empty("log.fileLogger.file")
            .unwrap_or(DEFAULT_LOG_FILE);
        Self::with_config(LoggerConfig::from_config(name, config), path)
    }

    #[must_use]
    pub fn with_config(config: LoggerConfig, path: impl AsRef<Path>) -> Self {
        Self {
            fallback: ConsoleSink::with_config(config.clone()),
            config,
            path: path.as_ref().to_path_buf(),
            write_lock: Mutex::new(()),
        }
    }

    /// Target file of this sink.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    fn lock_write(&self) -> MutexGuard<'_, ()> {
        // A poisoned lock only means another caller panicked mid-write;
        // logging still must not.
        self.write_lock.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn open_append(&self) -> io::Result<File> {
        OpenOptions::new().create(true).append(true).open(&self.path)
    }

    // Best-effort diagnostic channel for a failed write path.
    fn report_write_failure(&self, level: Level, err: &io::Error) {
        self.fallback
            .log_at(level, &format!("error while writing the log: {err}"));
    }

    // One line, one open/flush/close cycle; console fallback on failure.
    fn write_line(&self, level: Level, message: &str) {
        if let Err(e) = self.append_line(level, message) {
            self.report_write_failure(level, &e);
            self.fallback.log_at(level, message);
        }
    }

    fn append_line(&self, level: Level, message: &str) -> io::Result<()> {
        let mut out = BufWriter::new(self.open_append()?);
        writeln!(out, "{}{}", prefix::build(&self.config, Some(level)), message)?;
        out.flush()
    }

    // Frame lines and the cause chain share one handle, held for the whole
    // call; the top-level summary has already gone through `write_line`.
    fn append_report_body(&self, level: Level, report: &ErrorReport) -> io::Result<()> {
        if report.frames().is_empty() && report.cause().is_none() {
            return Ok(());
        }
        let line_prefix = prefix::build(&self.config, Some(level));
        let mut out = BufWriter::new(self.open_append()?);
        for frame in report.frames() {
            writeln!(out, "{line_prefix}    {frame}")?;
        }
        let mut cause = report.cause();
        while let Some(node) = cause {
            writeln!(out, "{line_prefix}  caused by:")?;
            writeln!(out, "{line_prefix}{}", node.summary())?;
            for frame in node.frames() {
                writeln!(out, "{line_prefix}    {frame}")?;
            }
            cause = node.cause();
        }
        out.flush()
    }
}

impl LogSink for FileSink {
    fn log_at(&self, level: Level, message: &str) {
        if !self.config.threshold.allows(level) {
            return;
        }
        let _guard = self.lock_write();
        self.write_line(level, message);
    }

    fn log_report_at(&self, level: Level, report: &ErrorReport) {
        if !self.config.threshold.allows(level) {
            return;
        }
        let _guard = self.lock_write();
        // The top-level message takes the single-line path, with its own
        // fallback semantics.
        self.write_line(level, report.summary());
        if let Err(e) = self.append_report_body(level, report) {
            self.report_write_failure(level, &e);
            // Partial output may already be on disk; the full report is
            // re-run on the console so nothing is lost. Known double-emit,
            // kept as-is.
            self.fallback.log_report_at(level, report);
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;

    #[test]
    fn target_path_comes_from_the_store() {
        let mut store = Config::new();
        store.set("log.fileLogger.file", "/tmp/custom.log");
        let sink = FileSink::new(None, &store);
        assert_eq!(sink.path(), Path::new("/tmp/custom.log"));
    }

    #[test]
    fn empty_path_value_falls_back_to_default() {
        let mut store = Config::new();
        store.set("log.fileLogger.file", "");
        let sink = FileSink::new(None, &store);
        assert_eq!(sink.path(), Path::new(DEFAULT_LOG_FILE));
    }

    #[test]
    fn fallback_console_shares_the_configuration() {
        let mut store = Config::new();
        store.set("log.useLevel", "true");
        store.set("log.separator", "|");
        let sink = FileSink::new(Some("io"), &store);
        assert_eq!(sink.fallback.config(), sink.config());
    }
}
