use std::fmt;
use std::str::FromStr;

/// Severity levels for logs, in ascending order.
///
/// Each level has a numeric rank and a one-letter code used in the log
/// prefix. A sink holds a threshold level; an event is emitted iff the
/// threshold [`allows`](Level::allows) the event level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// Lowest level. A threshold of `Fine` lets every event through.
    Fine,
    /// Used to check for problems during development.
    Debug,
    /// Default level.
    Info,
    /// Captured failures the program recovers from.
    Warning,
    /// Serious problems.
    Error,
    /// Highest level, for exit conditions.
    Fatal,
}

impl Level {
    /// Numeric rank of this level; higher means more severe.
    #[must_use]
    pub fn rank(self) -> u8 {
        match self {
            Level::Fine => 0,
            Level::Debug => 2,
            Level::Info => 4,
            Level::Warning => 6,
            Level::Error => 8,
            Level::Fatal => 10,
        }
    }

    /// One-letter code of this level, used in the log prefix.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Level::Fine => "F",
            Level::Debug => "D",
            Level::Info => "I",
            Level::Warning => "W",
            Level::Error => "E",
            Level::Fatal => "X",
        }
    }

    /// Tests whether an event at `event` level passes a threshold of `self`.
    #[must_use]
    pub fn allows(self, event: Level) -> bool {
        self.rank() <= event.rank()
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Level::Fine => "FINE",
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warning => "WARNING",
            Level::Error => "ERROR",
            Level::Fatal => "FATAL",
        };
        f.write_str(name)
    }
}

/// Error returned when a level name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError(String);

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown log level: {}", self.0)
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "FINE" => Ok(Level::Fine),
            "DEBUG" => Ok(Level::Debug),
            "INFO" => Ok(Level::Info),
            "WARNING" => Ok(Level::Warning),
            "ERROR" => Ok(Level::Error),
            "FATAL" => Ok(Level::Fatal),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}
