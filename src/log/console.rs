use std::io::{self, Write};

use crate::config::Config;
use crate::log::level::Level;
use crate::log::logger_config::LoggerConfig;
use crate::log::prefix;
use crate::log::report::ErrorReport;
use crate::log::sink::LogSink;

/// Sink that writes log lines to standard output.
///
/// Each line is written through a locked stdout handle, so concurrent callers
/// interleave at line granularity. Write errors are discarded: a logging call
/// never fails.
#[derive(Debug, Clone, Default)]
pub struct ConsoleSink {
    config: LoggerConfig,
}

impl ConsoleSink {
    /// Creates a console sink named `name`, configured from the store.
    #[must_use]
    pub fn new(name: Option<&str>, config: &Config) -> Self {
        Self::with_config(LoggerConfig::from_config(name, config))
    }

    #[must_use]
    pub fn with_config(config: LoggerConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    fn write_line(&self, level: Level, message: &str) {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        let _ = writeln!(out, "{}{}", prefix::build(&self.config, Some(level)), message);
    }
}

impl LogSink for ConsoleSink {
    fn log_at(&self, level: Level, message: &str) {
        if self.config.threshold.allows(level) {
            self.write_line(level, message);
        }
    }

    fn log_report_at(&self, level: Level, report: &ErrorReport) {
        if !self.config.threshold.allows(level) {
            return;
        }
        self.write_line(level, report.summary());
        for frame in report.frames() {
            self.write_line(level, &format!("    {frame}"));
        }
        if let Some(cause) = report.cause() {
            self.write_line(level, "  caused by:");
            self.log_report_at(level, cause);
        }
    }
}
