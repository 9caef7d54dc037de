use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use std::thread;

use andylog::log::file::DEFAULT_LOG_FILE;
use andylog::{ErrorReport, FileSink, Level, LogSink, LoggerConfig};

fn temp_log_path(dir: &tempfile::TempDir) -> PathBuf {
    dir.path().join("test.log")
}

fn read_lines(path: &std::path::Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .expect("log file should exist")
        .lines()
        .map(str::to_string)
        .collect()
}

#[derive(Debug)]
struct ChainedError {
    message: &'static str,
    source: Option<Box<ChainedError>>,
}

impl ChainedError {
    fn chain(outer: &'static str, middle: &'static str, inner: &'static str) -> Self {
        ChainedError {
            message: outer,
            source: Some(Box::new(ChainedError {
                message: middle,
                source: Some(Box::new(ChainedError {
                    message: inner,
                    source: None,
                })),
            })),
        }
    }
}

impl fmt::Display for ChainedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message)
    }
}

impl std::error::Error for ChainedError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.as_ref().map(|s| s as &(dyn std::error::Error + 'static))
    }
}

#[test]
fn lines_append_in_call_order() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = temp_log_path(&dir);
    std::fs::write(&path, "old line\n").expect("seed file");

    let sink = FileSink::with_config(LoggerConfig::default(), &path);
    sink.log("a");
    sink.log("b");

    assert_eq!(read_lines(&path), vec!["old line", "a", "b"]);
}

#[test]
fn each_message_is_its_own_open_close_cycle() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = temp_log_path(&dir);

    let sink = FileSink::with_config(LoggerConfig::default(), &path);
    sink.log("a");
    std::fs::remove_file(&path).expect("remove between calls");
    sink.log("b");

    // The second call reopened the target, so only "b" is present.
    assert_eq!(read_lines(&path), vec!["b"]);
}

#[test]
fn suppressed_levels_never_touch_the_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = temp_log_path(&dir);

    let config = LoggerConfig {
        threshold: Level::Error,
        ..LoggerConfig::default()
    };
    let sink = FileSink::with_config(config, &path);
    sink.log_at(Level::Debug, "below threshold");
    sink.log_report_at(Level::Info, &ErrorReport::new("also below"));

    assert!(!path.exists(), "no file should be created for suppressed events");
}

#[test]
fn unwritable_target_degrades_to_console_and_returns_normally() {
    let dir = tempfile::tempdir().expect("tempdir");

    // The target is a directory: every open in append mode fails.
    let sink = FileSink::with_config(LoggerConfig::default(), dir.path());
    sink.log("survives the failure");
    sink.log_error(&ChainedError::chain("outer", "middle", "inner"));
    // Reaching this point is the contract: no panic, no propagated error.
}

#[test]
fn report_renders_headers_frames_and_cause_markers_in_order() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = temp_log_path(&dir);

    let report = ErrorReport::new("request failed")
        .with_frames(vec!["frame one".to_string(), "frame two".to_string()])
        .caused_by(
            ErrorReport::new("connection reset")
                .with_frames(vec!["frame three".to_string()])
                .caused_by(ErrorReport::new("socket closed")),
        );

    let sink = FileSink::with_config(LoggerConfig::default(), &path);
    sink.log_report_at(Level::Error, &report);

    assert_eq!(
        read_lines(&path),
        vec![
            "request failed",
            "    frame one",
            "    frame two",
            "  caused by:",
            "connection reset",
            "    frame three",
            "  caused by:",
            "socket closed",
        ]
    );
}

#[test]
fn report_lines_share_the_sink_prefix() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = temp_log_path(&dir);

    let config = LoggerConfig {
        name: Some("io".to_string()),
        use_level: true,
        ..LoggerConfig::default()
    };
    let sink = FileSink::with_config(config, &path);
    let report = ErrorReport::new("top")
        .with_frames(vec!["frame".to_string()])
        .caused_by(ErrorReport::new("root"));
    sink.log_report_at(Level::Error, &report);

    assert_eq!(
        read_lines(&path),
        vec![
            "E::io::top",
            "E::io::    frame",
            "E::io::  caused by:",
            "E::io::root",
        ]
    );
}

#[test]
fn log_error_walks_a_two_cause_chain() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = temp_log_path(&dir);

    let sink = FileSink::with_config(LoggerConfig::default(), &path);
    sink.log_error(&ChainedError::chain(
        "request failed",
        "connection reset",
        "socket closed",
    ));

    // Backtrace frames depend on the environment; headers and markers do
    // not. Frame lines carry four extra indent spaces and are filtered out.
    let lines: Vec<String> = read_lines(&path)
        .into_iter()
        .filter(|line| !line.starts_with("    "))
        .collect();

    assert_eq!(
        lines,
        vec![
            "request failed",
            "  caused by:",
            "connection reset",
            "  caused by:",
            "socket closed",
        ]
    );
}

#[test]
fn concurrent_writers_keep_every_line_intact() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = temp_log_path(&dir);

    let sink = Arc::new(FileSink::with_config(LoggerConfig::default(), &path));
    let mut handles = Vec::new();
    for worker in 0..4 {
        let sink = Arc::clone(&sink);
        handles.push(thread::spawn(move || {
            for i in 0..25 {
                sink.log(&format!("worker {worker} line {i}"));
            }
        }));
    }
    for handle in handles {
        handle.join().expect("worker thread");
    }

    let lines = read_lines(&path);
    assert_eq!(lines.len(), 100);
    for line in &lines {
        assert!(
            line.starts_with("worker ") && line.contains(" line "),
            "interleaved or torn line: {line:?}"
        );
    }
}

#[test]
fn default_target_name_matches_contract() {
    assert_eq!(DEFAULT_LOG_FILE, "andyLog.log");
}
