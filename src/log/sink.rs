use std::error::Error;

use crate::log::level::Level;
use crate::log::report::ErrorReport;

/// Output strategy for log events.
///
/// A sink accepts a formatted line (or an error report) at a given level and
/// writes it to its destination. Logging must never be the reason the host
/// program crashes: no method panics or returns an error — a sink that
/// cannot write degrades or discards instead.
pub trait LogSink: Send + Sync {
    /// Writes one line at `level`, if the configured threshold allows it.
    fn log_at(&self, level: Level, message: &str);

    /// Renders an error report at `level`: per chain node, outermost first,
    /// the summary line, one line per stack frame (prefix plus four extra
    /// indent spaces), and a `caused by:` marker before every inner node.
    fn log_report_at(&self, level: Level, report: &ErrorReport);

    /// Writes one line at [`Level::Info`].
    fn log(&self, message: &str) {
        self.log_at(Level::Info, message);
    }

    /// Snapshots `err` with its cause chain and renders it at `level`.
    fn log_error_at(&self, level: Level, err: &(dyn Error + 'static)) {
        self.log_report_at(level, &ErrorReport::capture(err));
    }

    /// Snapshots `err` with its cause chain and renders it at [`Level::Info`].
    fn log_error(&self, err: &(dyn Error + 'static)) {
        self.log_error_at(Level::Info, err);
    }
}
