//! Minimal structured logging with interchangeable output sinks.
//!
//! Events are filtered by severity, formatted with an optional
//! `[date][level][name]` prefix, and dispatched synchronously to exactly one
//! sink: the console, an append-only text file, or a no-op sink that discards
//! everything. The active sink implementation can be chosen at runtime from
//! configuration through the sink registry.
//!
//! A logging call never panics and never returns an error: malformed
//! configuration falls back to defaults, unknown sink identifiers degrade to
//! the console sink, and file I/O failures degrade the failing call to the
//! console so the message is not lost.

/// Configuration store: string key/value pairs under the `log.` namespace.
pub mod config;
/// Severity model, prefix formatting, sinks, and the sink registry.
pub mod log;

pub use config::Config;
pub use log::{
    ConsoleSink, ErrorReport, FileSink, Level, LogSink, LoggerConfig, NullSink, SinkRegistry,
};
