//! Per-attempt diagnostic log
//!
//! Append-only text sink tailed by the web debug page. One line is written
//! before each launch attempt and one after its classification. Writes
//! return a Result that call sites deliberately discard: a full disk or a
//! missing directory must never abort playback.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Lifecycle phase of a logged event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// About to launch a candidate
    Attempt,
    /// Candidate verified as playing
    Success,
    /// Candidate failed or exited too quickly
    Failure,
    /// Player binary missing
    NotFound,
}

impl Phase {
    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Attempt => "attempt",
            Phase::Success => "success",
            Phase::Failure => "failure",
            Phase::NotFound => "not_found",
        }
    }
}

/// Append-only attempt log bound to one sink file
#[derive(Debug, Clone)]
pub struct AttemptLog {
    path: PathBuf,
}

impl AttemptLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one timestamped entry.
    ///
    /// Callers discard the result (`let _ = log.record(...)`); rotation and
    /// size limits are an operational concern outside this process.
    pub fn record(&self, phase: Phase, backend: &str, message: &str) -> std::io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let timestamp = chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%z");
        writeln!(file, "{timestamp} [{}] {backend}: {message}", phase.as_str())
    }
}
