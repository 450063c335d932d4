//! Diagnostic log sink
//!
//! Error reports are written to the same file as the debug log, but always,
//! not only in debug mode.

use std::path::{Path, PathBuf};

use chrono::Local;

use crate::traits::DiagnosticSink;
use crate::utils;

/// Appends timestamped entries to a log file
#[derive(Debug, Clone)]
pub struct DebugLogSink {
    path: PathBuf,
}

impl DebugLogSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for DebugLogSink {
    /// Sink writing to the platform debug log path
    fn default() -> Self {
        Self::new(utils::get_debug_log_path())
    }
}

impl DiagnosticSink for DebugLogSink {
    fn emit(&mut self, entry: &str) {
        let line = format!("[{}] {}", Local::now().format("%Y-%m-%d %H:%M:%S"), entry);
        // A diagnostic channel that fails has nowhere left to report to
        let _ = utils::append_line(&self.path, &line);
    }
}
