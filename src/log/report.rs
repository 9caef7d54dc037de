use std::backtrace::{Backtrace, BacktraceStatus};
use std::error::Error;

/// Snapshot of an error and its cause chain.
///
/// Sinks render a report as one summary line per chain node, the node's
/// stack-frame lines indented four extra spaces, and a `caused by:` marker
/// before every node except the outermost. Reifying the chain here keeps the
/// rendering identical across sink variants.
#[derive(Debug, Clone)]
pub struct ErrorReport {
    summary: String,
    frames: Vec<String>,
    cause: Option<Box<ErrorReport>>,
}

impl ErrorReport {
    #[must_use]
    pub fn new(summary: impl Into<String>) -> Self {
        Self {
            summary: summary.into(),
            frames: Vec::new(),
            cause: None,
        }
    }

    /// Attaches stack-frame lines to this node.
    #[must_use]
    pub fn with_frames(mut self, frames: Vec<String>) -> Self {
        self.frames = frames;
        self
    }

    /// Sets the direct cause of this node.
    #[must_use]
    pub fn caused_by(mut self, cause: ErrorReport) -> Self {
        self.cause = Some(Box::new(cause));
        self
    }

    /// Snapshots `err` and its [`Error::source`] chain, outermost first.
    ///
    /// The outermost node carries backtrace frames when the runtime captured
    /// one (`RUST_BACKTRACE=1`); otherwise it has none and no frame lines are
    /// rendered. Inner nodes never carry frames of their own.
    #[must_use]
    pub fn capture(err: &(dyn Error + 'static)) -> Self {
        Self::from_chain(err).with_frames(capture_frames())
    }

    fn from_chain(err: &(dyn Error + 'static)) -> Self {
        let mut report = ErrorReport::new(err.to_string());
        if let Some(source) = err.source() {
            report.cause = Some(Box::new(Self::from_chain(source)));
        }
        report
    }

    #[must_use]
    pub fn summary(&self) -> &str {
        &self.summary
    }

    #[must_use]
    pub fn frames(&self) -> &[String] {
        &self.frames
    }

    #[must_use]
    pub fn cause(&self) -> Option<&ErrorReport> {
        self.cause.as_deref()
    }

    /// Number of nodes in the chain, this one included.
    #[must_use]
    pub fn depth(&self) -> usize {
        1 + self.cause().map_or(0, ErrorReport::depth)
    }
}

/// Collects the current backtrace as trimmed lines, or nothing when capture
/// is disabled for this process.
fn capture_frames() -> Vec<String> {
    let backtrace = Backtrace::capture();
    if backtrace.status() != BacktraceStatus::Captured {
        return Vec::new();
    }
    backtrace
        .to_string()
        .lines()
        .map(|line| line.trim().to_string())
        .filter(|line| !line.is_empty())
        .collect()
}
