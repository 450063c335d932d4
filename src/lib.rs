//! Business Suite Pro helpers
//!
//! Stateless helpers for page scripts: loading indicator, API error
//! reporting, required-field validation and en-KE currency/date formatting.
//! Host capabilities (display target, diagnostic log, blocking alert, locale
//! engine) are injected through the traits in [`traits`].

pub mod config;
pub mod helpers;
pub mod logic;
pub mod model;
pub mod services;
pub mod traits;
pub mod ui;
pub mod utils;

pub use config::Config;
pub use helpers::{
    format_currency, format_date, handle_api_error, show_loading, try_format_date,
    validate_form, DEFAULT_CURRENCY, DEFAULT_ERROR_MESSAGE,
};
pub use model::{ErrorInfo, FieldValue, FormData, ValidationResult};
pub use services::{DebugLogSink, KenyanEnglish, LineNotifier};
pub use traits::{DiagnosticSink, DisplayTarget, LocaleFormatter, Notifier};
pub use ui::{Pane, TerminalAlert, LOADING_FRAGMENT};
