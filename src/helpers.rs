//! Page-script helpers
//!
//! The five entry points page scripts call. Each is stateless. Host
//! capabilities are passed in by the caller.

use crate::logic::errors::{diagnostic_entry, notification_text};
use crate::logic::formatting::{FormatError, INVALID_DATE};
use crate::logic::validation::validate_required;
use crate::model::{ErrorInfo, FormData, ValidationResult};
use crate::traits::{DiagnosticSink, DisplayTarget, LocaleFormatter, Notifier};
use crate::ui::LOADING_FRAGMENT;
use crate::utils::log_debug;

/// Context message used when the caller supplies none
pub const DEFAULT_ERROR_MESSAGE: &str = "An error occurred";

/// Currency used when the caller supplies none
pub const DEFAULT_CURRENCY: &str = "KES";

/// Replace the target's visible content with the loading fragment
pub fn show_loading<T: DisplayTarget + ?Sized>(target: &mut T) {
    target.set_content(LOADING_FRAGMENT);
}

/// Report an already-caught error to the diagnostic log and the user
///
/// Writes `API Error: <detail>` to `sink`, then shows
/// `"<message>: <error message or 'Please try again.'>"` through `notifier`
/// and blocks until it is acknowledged. Nothing is retried. A failing
/// notifier is recorded in `sink` and otherwise ignored.
pub fn handle_api_error<S, N>(error: &ErrorInfo, message: Option<&str>, sink: &mut S, notifier: &mut N)
where
    S: DiagnosticSink + ?Sized,
    N: Notifier + ?Sized,
{
    sink.emit(&diagnostic_entry(error));

    let text = notification_text(error, message.unwrap_or(DEFAULT_ERROR_MESSAGE));
    log_debug(&format!("Presenting alert: {}", text));

    if let Err(e) = notifier.present_and_wait(&text) {
        sink.emit(&format!("Notification failed: {:#}", e));
    }
}

/// Check that every required field carries a non-blank value
///
/// See [`validate_required`]; the first failing field in `required_fields`
/// order is reported.
pub fn validate_form<S: AsRef<str>>(form_data: &FormData, required_fields: &[S]) -> ValidationResult {
    validate_required(form_data, required_fields)
}

/// Format `amount` in `currency` (default `KES`)
pub fn format_currency<F: LocaleFormatter + ?Sized>(
    formatter: &F,
    amount: f64,
    currency: Option<&str>,
) -> String {
    formatter.format_currency(amount, currency.unwrap_or(DEFAULT_CURRENCY))
}

/// Format a date string, returning "Invalid Date" when it cannot be parsed
pub fn format_date<F: LocaleFormatter + ?Sized>(formatter: &F, input: &str) -> String {
    try_format_date(formatter, input).unwrap_or_else(|e| {
        log_debug(&format!("format_date: {}", e));
        INVALID_DATE.to_string()
    })
}

/// Format a date string, reporting unparsable input as an error
pub fn try_format_date<F: LocaleFormatter + ?Sized>(
    formatter: &F,
    input: &str,
) -> Result<String, FormatError> {
    formatter.format_date(input)
}
