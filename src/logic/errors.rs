use crate::model::ErrorInfo;

/// Shown when the error carries no message of its own
pub const FALLBACK_ERROR_TEXT: &str = "Please try again.";

/// Prefix of every diagnostic entry written for a reported error
pub const DIAGNOSTIC_PREFIX: &str = "API Error:";

/// Text for the user notification: `"<message>: <error message>"`
///
/// Falls back to "Please try again." when the error has no message.
pub fn notification_text(error: &ErrorInfo, message: &str) -> String {
    format!(
        "{}: {}",
        message,
        error.message().unwrap_or(FALLBACK_ERROR_TEXT)
    )
}

/// Diagnostic log entry for a reported error
pub fn diagnostic_entry(error: &ErrorInfo) -> String {
    format!("{} {}", DIAGNOSTIC_PREFIX, error.detail())
}
