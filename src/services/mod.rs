//! Host Services
//!
//! Concrete implementations of the host capability traits:
//! - diagnostics: Diagnostic log file sink
//! - locale: Kenyan English number and date formatting engine
//! - notify: Line-based blocking notification for non-interactive hosts

pub mod diagnostics;
pub mod locale;
pub mod notify;

// Re-export commonly used types for convenience
pub use diagnostics::DebugLogSink;
pub use locale::KenyanEnglish;
pub use notify::LineNotifier;
