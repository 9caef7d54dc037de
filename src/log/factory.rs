use std::collections::HashMap;

use crate::config::Config;
use crate::log::console::ConsoleSink;
use crate::log::file::FileSink;
use crate::log::null::NullSink;
use crate::log::sink::LogSink;

/// Constructor for a sink variant, as stored in the registry.
pub type SinkCtor = fn(Option<&str>, &Config) -> Box<dyn LogSink>;

/// Maps sink type identifiers to constructors.
///
/// Resolution is a plain lookup with a deterministic default: an absent,
/// empty, or unknown `log.defaultLogger` identifier yields a [`ConsoleSink`].
/// Identifiers are matched after trimming and ASCII-lowercasing. Built-in
/// identifiers are `console`, `file` and `null`.
pub struct SinkRegistry {
    ctors: HashMap<String, SinkCtor>,
}

impl Default for SinkRegistry {
    fn default() -> Self {
        let mut registry = Self {
            ctors: HashMap::new(),
        };
        registry.register("console", console_sink);
        registry.register("file", file_sink);
        registry.register("null", null_sink);
        registry
    }
}

impl SinkRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the constructor for `id`.
    pub fn register(&mut self, id: &str, ctor: SinkCtor) {
        self.ctors.insert(normalize(id), ctor);
    }

    /// Looks up the constructor registered for `id`, if any.
    #[must_use]
    pub fn resolve(&self, id: &str) -> Option<SinkCtor> {
        self.ctors.get(&normalize(id)).copied()
    }

    /// Builds the sink variant selected by the store's `log.defaultLogger`
    /// key, constructed with the requested `name` and the full store.
    ///
    /// Never fails: resolution falls back to the console constructor and all
    /// built-in constructors are infallible (malformed settings already
    /// degrade to defaults during construction).
    #[must_use]
    pub fn create(&self, name: Option<&str>, config: &Config) -> Box<dyn LogSink> {
        let ctor = config
            .get_non_empty("log.defaultLogger")
            .and_then(|id| self.resolve(id))
            .unwrap_or(console_sink);
        ctor(name, config)
    }
}

/// Builds the configured sink through a registry with the built-in variants.
#[must_use]
pub fn create_sink(name: Option<&str>, config: &Config) -> Box<dyn LogSink> {
    SinkRegistry::new().create(name, config)
}

fn normalize(id: &str) -> String {
    id.trim().to_ascii_lowercase()
}

fn console_sink(name: Option<&str>, config: &Config) -> Box<dyn LogSink> {
    Box::new(ConsoleSink::new(name, config))
}

fn file_sink(name: Option<&str>, config: &Config) -> Box<dyn LogSink> {
    Box::new(FileSink::new(name, config))
}

fn null_sink(name: Option<&str>, config: &Config) -> Box<dyn LogSink> {
    Box::new(NullSink::new(name, config))
}
