use anyhow::Error;

/// An already-caught error handed to the error reporter
///
/// Only two things are assumed about it: an optional human-readable
/// `message`, and a `detail` string suitable for the diagnostic log.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ErrorInfo {
    message: Option<String>,
    detail: String,
}

impl ErrorInfo {
    /// Error carrying a message. The detail defaults to the message.
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            detail: message.clone(),
            message: Some(message),
        }
    }

    /// Error without any message of its own
    pub fn without_message(detail: impl Into<String>) -> Self {
        Self {
            message: None,
            detail: detail.into(),
        }
    }

    /// Replace the diagnostic detail
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = detail.into();
        self
    }

    /// The error's own message. An empty message counts as absent.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref().filter(|m| !m.is_empty())
    }

    pub fn detail(&self) -> &str {
        &self.detail
    }
}

impl From<&Error> for ErrorInfo {
    /// Message is the outermost `Display`, detail is the full context chain
    fn from(error: &Error) -> Self {
        Self {
            message: Some(error.to_string()),
            detail: format!("{:#}", error),
        }
    }
}

impl From<Error> for ErrorInfo {
    fn from(error: Error) -> Self {
        ErrorInfo::from(&error)
    }
}
