//! Simple, leveled logging macros for any [`LogSink`](crate::log::LogSink).
//!
//! # Feature Flags
//! specific log levels are controlled by cargo features:
//! `log-fine`, `log-debug`, `log-info`, `log-warning`, `log-error`,
//! `log-fatal`.
//!
//! If a feature is disabled, the corresponding macros expand to `()`,
//! removing all formatting and allocation overhead at compile time. The
//! sink's runtime threshold still applies to whatever the macros emit.

#[macro_export]
macro_rules! sink_log {
    ($sink:expr, $lvl:expr, $($arg:tt)*) => {{
        let __msg = format!($($arg)*);
        $sink.log_at($lvl, &__msg);
    }};
}

// ---------------------- FINE ----------------------
#[cfg(feature = "log-fine")]
#[macro_export]
macro_rules! sink_fine { ($sink:expr, $($arg:tt)*) => { $crate::sink_log!($sink, $crate::log::level::Level::Fine, $($arg)*) } }

#[cfg(not(feature = "log-fine"))]
#[macro_export]
macro_rules! sink_fine {
    ($($arg:tt)*) => {
        ()
    };
}

// ---------------------- DEBUG ----------------------
#[cfg(feature = "log-debug")]
#[macro_export]
macro_rules! sink_debug { ($sink:expr, $($arg:tt)*) => { $crate::sink_log!($sink, $crate::log::level::Level::Debug, $($arg)*) } }

#[cfg(not(feature = "log-debug"))]
#[macro_export]
macro_rules! sink_debug {
    ($($arg:tt)*) => {
        ()
    };
}

// ---------------------- INFO ----------------------
#[cfg(feature = "log-info")]
#[macro_export]
macro_rules! sink_info { ($sink:expr, $($arg:tt)*) => { $crate::sink_log!($sink, $crate::log::level::Level::Info, $($arg)*) } }

#[cfg(not(feature = "log-info"))]
#[macro_export]
macro_rules! sink_info {
    ($($arg:tt)*) => {
        ()
    };
}

// ---------------------- WARNING ----------------------
#[cfg(feature = "log-warning")]
#[macro_export]
macro_rules! sink_warning { ($sink:expr, $($arg:tt)*) => { $crate::sink_log!($sink, $crate::log::level::Level::Warning, $($arg)*) } }

#[cfg(not(feature = "log-warning"))]
#[macro_export]
macro_rules! sink_warning {
    ($($arg:tt)*) => {
        ()
    };
}

// ---------------------- ERROR ----------------------
#[cfg(feature = "log-error")]
#[macro_export]
macro_rules! sink_error { ($sink:expr, $($arg:tt)*) => { $crate::sink_log!($sink, $crate::log::level::Level::Error, $($arg)*) } }

#[cfg(not(feature = "log-error"))]
#[macro_export]
macro_rules! sink_error {
    ($($arg:tt)*) => {
        ()
    };
}

// ---------------------- FATAL ----------------------
// Generally always enabled, but consistent structure allows disabling if
// really needed.
#[cfg(feature = "log-fatal")]
#[macro_export]
macro_rules! sink_fatal { ($sink:expr, $($arg:tt)*) => { $crate::sink_log!($sink, $crate::log::level::Level::Fatal, $($arg)*) } }

#[cfg(not(feature = "log-fatal"))]
#[macro_export]
macro_rules! sink_fatal {
    ($($arg:tt)*) => {
        ()
    };
}
