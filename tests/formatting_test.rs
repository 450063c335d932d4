//! Integration tests for en-KE currency and date formatting

use bizsuite::logic::formatting::{FormatError, INVALID_DATE};
use bizsuite::{format_currency, format_date, try_format_date, KenyanEnglish, LocaleFormatter};

const NBSP: char = '\u{a0}';

#[test]
fn test_whole_shillings_have_no_decimals() {
    let fmt = KenyanEnglish::new();
    assert_eq!(format_currency(&fmt, 1500.0, Some("KES")), format!("Ksh{}1,500", NBSP));
}

#[test]
fn test_fractional_shillings_have_two_decimals() {
    let fmt = KenyanEnglish::new();
    assert_eq!(format_currency(&fmt, 1500.5, None), format!("Ksh{}1,500.50", NBSP));
    assert_eq!(format_currency(&fmt, 0.1, None), format!("Ksh{}0.10", NBSP));
}

#[test]
fn test_large_amount_grouping() {
    let fmt = KenyanEnglish::new();
    assert_eq!(
        format_currency(&fmt, 12_345_678.0, None),
        format!("Ksh{}12,345,678", NBSP)
    );
}

#[test]
fn test_other_currencies() {
    let fmt = KenyanEnglish::new();
    assert_eq!(format_currency(&fmt, 99.99, Some("USD")), "US$99.99");
    assert_eq!(format_currency(&fmt, 2500.0, Some("TZS")), format!("TSh{}2,500", NBSP));
}

#[test]
fn test_date_components_in_order() {
    let fmt = KenyanEnglish::new();
    let out = format_date(&fmt, "2024-01-16 14:20:00");
    assert_eq!(out, "Jan 16, 2024, 02:20 PM");

    let month = out.find("Jan").unwrap();
    let day = out.find("16").unwrap();
    let year = out.find("2024").unwrap();
    let time = out.find("02:20").unwrap();
    let marker = out.find("PM").unwrap();
    assert!(month < day && day < year && year < time && time < marker);
}

#[test]
fn test_iso_utc_input_renders_in_east_africa_time() {
    let fmt = KenyanEnglish::new();
    assert_eq!(format_date(&fmt, "2024-01-18T08:45:00Z"), "Jan 18, 2024, 11:45 AM");
}

#[test]
fn test_invalid_date_keeps_host_text() {
    let fmt = KenyanEnglish::new();
    assert_eq!(format_date(&fmt, "31/31/2024"), INVALID_DATE);
}

#[test]
fn test_invalid_date_strict_error() {
    let fmt = KenyanEnglish::new();
    assert_eq!(
        try_format_date(&fmt, "tomorrow"),
        Err(FormatError::InvalidDate("tomorrow".to_string()))
    );
}

/// A substitute engine can be injected in place of the en-KE one
struct FixedEngine;

impl LocaleFormatter for FixedEngine {
    fn format_currency(&self, amount: f64, currency: &str) -> String {
        format!("{currency}:{amount}")
    }

    fn format_date(&self, input: &str) -> Result<String, FormatError> {
        Ok(format!("date({input})"))
    }

    fn format_timestamp_millis(&self, millis: i64) -> Result<String, FormatError> {
        Ok(format!("ts({millis})"))
    }
}

#[test]
fn test_helpers_use_injected_engine() {
    assert_eq!(format_currency(&FixedEngine, 10.0, None), "KES:10");
    assert_eq!(format_date(&FixedEngine, "anything"), "date(anything)");
}
