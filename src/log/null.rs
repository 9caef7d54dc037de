use crate::config::Config;
use crate::log::level::Level;
use crate::log::report::ErrorReport;
use crate::log::sink::LogSink;

/// Sink that discards everything.
///
/// Accepts the same calls as every other sink with no observable effect;
/// used to fully disable logging without changing call sites.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl NullSink {
    /// Accepts and ignores the same construction inputs as the other sinks.
    #[must_use]
    pub fn new(_name: Option<&str>, _config: &Config) -> Self {
        Self
    }
}

impl LogSink for NullSink {
    #[inline]
    fn log_at(&self, _level: Level, _message: &str) {}

    #[inline]
    fn log_report_at(&self, _level: Level, _report: &ErrorReport) {}
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;

    #[test]
    fn accepts_every_operation_without_effect() {
        let mut store = Config::new();
        store.set("log.level", "FINE");
        let sink = NullSink::new(Some("quiet"), &store);

        sink.log("dropped");
        sink.log_at(Level::Fatal, "dropped");

        let report = ErrorReport::new("outer")
            .caused_by(ErrorReport::new("middle").caused_by(ErrorReport::new("inner")));
        sink.log_report_at(Level::Error, &report);
    }
}
