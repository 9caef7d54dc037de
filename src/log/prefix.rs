use std::fmt::Write;

use chrono::{DateTime, Local};

use crate::log::level::Level;
use crate::log::logger_config::{DEFAULT_DATE_FORMAT, LoggerConfig};

/// Builds the prefix written before a log line.
///
/// The prefix is `[date+sep][level+sep][name+sep]`, each segment optional
/// depending on the configuration, and may be the empty string. The function
/// is pure apart from reading the clock and is shared by all sink variants so
/// they render identical prefixes.
#[must_use]
pub fn build(config: &LoggerConfig, level: Option<Level>) -> String {
    build_at(config, level, Local::now())
}

/// Timestamp-parameterized core of [`build`].
#[must_use]
pub fn build_at(config: &LoggerConfig, level: Option<Level>, now: DateTime<Local>) -> String {
    let mut prefix = String::new();
    // date
    if config.use_date {
        prefix.push_str(&format_date(config, now));
        prefix.push_str(&config.separator);
    }
    // level
    if config.use_level {
        if let Some(level) = level {
            prefix.push_str(level.code());
            prefix.push_str(&config.separator);
        }
    }
    // name
    if let Some(name) = config.name.as_deref().filter(|n| !n.is_empty()) {
        prefix.push_str(name);
        prefix.push_str(&config.separator);
    }
    prefix
}

/// Renders the date segment. A pattern that fails to render (possible when a
/// `LoggerConfig` is built by hand rather than through `from_config`) falls
/// back to the default pattern so the prefix path cannot panic.
fn format_date(config: &LoggerConfig, now: DateTime<Local>) -> String {
    let mut date = String::new();
    if write!(date, "{}", now.format(&config.date_format)).is_err() {
        date.clear();
        let _ = write!(date, "{}", now.format(DEFAULT_DATE_FORMAT));
    }
    date
}
