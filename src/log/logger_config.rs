use chrono::format::{Item, StrftimeItems};

use crate::config::Config;
use crate::log::level::Level;

/// Default strftime pattern for the date segment of the prefix.
pub const DEFAULT_DATE_FORMAT: &str = "%y-%m-%d %H:%M:%S";

/// Default separator between prefix segments.
pub const DEFAULT_SEPARATOR: &str = "::";

/// Construction-time options shared by every sink variant.
///
/// Built once from the [`Config`] store when a sink is constructed and
/// immutable afterwards. Malformed values (an unparsable date pattern, an
/// unknown level name) are silently discarded and the field keeps its
/// default: construction never fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerConfig {
    /// Logger name, used in the prefix when non-empty.
    pub name: Option<String>,
    /// Whether the prefix starts with a date segment.
    pub use_date: bool,
    /// strftime pattern for the date segment.
    pub date_format: String,
    /// Minimum level this sink emits.
    pub threshold: Level,
    /// Whether the prefix carries the one-letter level code.
    pub use_level: bool,
    /// Separator written after each emitted prefix segment.
    pub separator: String,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            name: None,
            use_date: false,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            threshold: Level::Info,
            use_level: false,
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }
}

impl LoggerConfig {
    /// Builds options for a sink named `name` from the store.
    ///
    /// Recognized keys: `log.useDate`, `log.dateFormat`, `log.level`,
    /// `log.useLevel`, `log.separator`. An empty name counts as no name.
    #[must_use]
    pub fn from_config(name: Option<&str>, config: &Config) -> Self {
        let mut opts = Self::default();
        opts.name = name.filter(|n| !n.is_empty()).map(str::to_string);

        if let Some(format) = config.get("log.dateFormat") {
            if is_valid_date_format(format) {
                opts.date_format = format.to_string();
            }
        }
        if let Some(level) = config.get("log.level") {
            if let Ok(level) = level.parse() {
                opts.threshold = level;
            }
        }
        opts.use_date = config.get_bool("log.useDate", opts.use_date);
        opts.use_level = config.get_bool("log.useLevel", opts.use_level);
        if let Some(separator) = config.get("log.separator") {
            opts.separator = separator.to_string();
        }
        opts
    }
}

/// Tests whether `format` is a well-formed strftime pattern.
fn is_valid_date_format(format: &str) -> bool {
    !StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
}
