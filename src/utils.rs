//! Utility functions used throughout the application

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};

// Global flag for debug mode
static DEBUG_MODE: AtomicBool = AtomicBool::new(false);

/// Get platform-specific debug log path
pub fn get_debug_log_path() -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push("bizsuite-debug.log");
    path
}

pub fn set_debug_mode(enabled: bool) {
    DEBUG_MODE.store(enabled, Ordering::Relaxed);
}

pub fn is_debug_mode() -> bool {
    DEBUG_MODE.load(Ordering::Relaxed)
}

/// Append a line to the debug log, only when debug mode is enabled
pub fn log_debug(msg: &str) {
    if !is_debug_mode() {
        return;
    }
    let _ = append_line(&get_debug_log_path(), msg);
}

/// Append `line` plus a newline to the file at `path`, creating it if needed
pub fn append_line(path: &Path, line: &str) -> std::io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{}", line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_log_path_in_temp_dir() {
        let path = get_debug_log_path();
        assert!(path.starts_with(std::env::temp_dir()));
        assert!(path.ends_with("bizsuite-debug.log"));
    }

    #[test]
    fn test_append_line_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("log.txt");

        append_line(&path, "first").unwrap();
        append_line(&path, "second").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "first\nsecond\n");
    }
}
