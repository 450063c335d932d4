//! Host capability traits
//!
//! The helpers never touch the terminal, the log file or the locale engine
//! directly. They go through these traits so page scripts can pass the real
//! host implementations and tests can pass mocks.

use anyhow::Result;

use crate::logic::formatting::FormatError;

/// A displayable container whose visible content can be replaced
///
/// Production code uses [`crate::ui::Pane`].
pub trait DisplayTarget {
    /// Replace the visible content with `content`
    fn set_content(&mut self, content: &str);
}

/// Diagnostic channel for errors that should be inspected later
///
/// Production code uses [`crate::services::DebugLogSink`].
pub trait DiagnosticSink {
    /// Record one diagnostic entry
    fn emit(&mut self, entry: &str);
}

/// Synchronous "present-and-wait" user notification
///
/// Implementations must not return until the user has acknowledged the
/// notification. [`crate::ui::TerminalAlert`] draws a modal dialog,
/// [`crate::services::LineNotifier`] prompts on a plain stream.
pub trait Notifier {
    /// Show `text` and block until acknowledged
    fn present_and_wait(&mut self, text: &str) -> Result<()>;
}

/// Locale-aware number and date formatting engine
///
/// One method per formatting need. [`crate::services::KenyanEnglish`]
/// is the built-in en-KE engine.
pub trait LocaleFormatter {
    /// Format `amount` in the currency identified by the ISO 4217 `currency` code
    fn format_currency(&self, amount: f64, currency: &str) -> String;

    /// Parse a date/date-time string and render it for display
    fn format_date(&self, input: &str) -> Result<String, FormatError>;

    /// Render a Unix timestamp given in milliseconds
    fn format_timestamp_millis(&self, millis: i64) -> Result<String, FormatError>;
}
