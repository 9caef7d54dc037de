use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Namespace prefix for recognized configuration keys.
const NAMESPACE: &str = "log.";

/// Process-wide configuration store for the logging subsystem.
///
/// Holds a flat string key/value map, retaining only keys under the `log.`
/// namespace. The store is populated once at startup (possibly merging
/// several files, last write wins per key) and then passed by reference into
/// sink constructors and the registry; it is never mutated by sinks.
#[derive(Debug, Clone, Default)]
pub struct Config {
    params: HashMap<String, String>,
}

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a configuration file.
    ///
    /// The format is line-oriented: `key = value` pairs, `#` comments and
    /// blank lines. Surrounding double quotes on a value are stripped, so a
    /// separator with significant leading or trailing spaces survives.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read. Malformed lines are
    /// skipped, not reported: a broken entry must not take logging down.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, String> {
        let mut config = Self::new();
        config.merge_file(path)?;
        Ok(config)
    }

    /// Merges a whole file into the store, overwriting existing keys.
    ///
    /// The file is parsed completely before the store is touched, so a load
    /// is observed as one whole-map merge.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read; the store is unchanged
    /// in that case.
    pub fn merge_file(&mut self, path: impl AsRef<Path>) -> Result<(), String> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Error reading file {}: {e}", path.display()))?;

        let mut pairs = Vec::new();
        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some(pos) = line.find('=') {
                let key = line[..pos].trim();
                let value = line[pos + 1..].trim().trim_matches('"');
                pairs.push((key.to_string(), value.to_string()));
            }
        }
        for (key, value) in pairs {
            self.set(&key, &value);
        }
        Ok(())
    }

    /// Stores a single value. Keys outside the `log.` namespace are ignored.
    pub fn set(&mut self, key: &str, value: &str) {
        if key.starts_with(NAMESPACE) {
            self.params.insert(key.to_string(), value.to_string());
        }
    }

    /// Removes a single key from the store.
    pub fn remove(&mut self, key: &str) {
        self.params.remove(key);
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn get_non_empty(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|s| !s.is_empty())
    }

    /// Reads a boolean value; anything other than `true`/`false` (any case)
    /// yields `default`.
    #[must_use]
    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        match self.get(key) {
            Some(v) if v.eq_ignore_ascii_case("true") => true,
            Some(v) if v.eq_ignore_ascii_case("false") => false,
            _ => default,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;
    use std::io::Write;

    fn write_temp(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(content.as_bytes()).expect("write");
        file
    }

    #[test]
    fn load_parses_pairs_comments_and_quotes() {
        let file = write_temp(
            "# logging setup\n\
             log.level = DEBUG\n\
             \n\
             log.separator = \" | \"\n\
             log.useDate=true\n",
        );
        let config = Config::load(file.path()).expect("load");

        assert_eq!(config.get("log.level"), Some("DEBUG"));
        assert_eq!(config.get("log.separator"), Some(" | "));
        assert_eq!(config.get("log.useDate"), Some("true"));
    }

    #[test]
    fn keys_outside_namespace_are_dropped() {
        let file = write_temp("log.level = INFO\napp.window.width = 800\n");
        let config = Config::load(file.path()).expect("load");

        assert_eq!(config.get("log.level"), Some("INFO"));
        assert_eq!(config.get("app.window.width"), None);
    }

    #[test]
    fn merge_is_last_write_wins() {
        let first = write_temp("log.level = INFO\nlog.useDate = true\n");
        let second = write_temp("log.level = ERROR\n");

        let mut config = Config::load(first.path()).expect("load first");
        config.merge_file(second.path()).expect("merge second");

        assert_eq!(config.get("log.level"), Some("ERROR"));
        assert_eq!(config.get("log.useDate"), Some("true"));
    }

    #[test]
    fn set_and_remove_respect_namespace() {
        let mut config = Config::new();
        config.set("log.defaultLogger", "file");
        config.set("window.width", "800");

        assert_eq!(config.get("log.defaultLogger"), Some("file"));
        assert_eq!(config.get("window.width"), None);

        config.remove("log.defaultLogger");
        assert!(config.is_empty());
    }

    #[test]
    fn get_bool_falls_back_on_garbage() {
        let mut config = Config::new();
        config.set("log.useDate", "TRUE");
        config.set("log.useLevel", "sometimes");

        assert!(config.get_bool("log.useDate", false));
        assert!(!config.get_bool("log.useLevel", false));
        assert!(config.get_bool("log.missing", true));
    }

    #[test]
    fn load_missing_file_is_an_error() {
        let result = Config::load("/nonexistent/andylog.conf");
        assert!(result.is_err());
    }
}
