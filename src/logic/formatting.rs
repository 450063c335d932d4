//! Formatting and display logic
//!
//! Pure functions behind the en-KE locale engine: currency symbols, digit
//! grouping, cent rounding, and date parsing/rendering.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone};
use thiserror::Error;

/// Text produced by the host for an unparsable date
pub const INVALID_DATE: &str = "Invalid Date";

/// Separator between an alphabetic currency symbol and the digits
pub const SYMBOL_SPACE: char = '\u{a0}';

/// Display pattern: abbreviated month, day, year, 12-hour time
const DATE_PATTERN: &str = "%b %-d, %Y, %I:%M %p";

/// Naive date-time layouts, read as wall-clock local time
const NAIVE_DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("Invalid date: {0:?}")]
    InvalidDate(String),

    #[error("Timestamp out of range: {0}ms")]
    InvalidTimestamp(i64),

    #[error("Invalid UTC offset: {0} minutes")]
    InvalidOffset(i32),
}

/// Currency symbol used by the en-KE locale for an ISO 4217 code
///
/// Codes without a dedicated symbol are shown as the code itself.
///
/// # Examples
/// ```
/// use bizsuite::logic::formatting::currency_symbol;
///
/// assert_eq!(currency_symbol("KES"), "Ksh");
/// assert_eq!(currency_symbol("USD"), "US$");
/// assert_eq!(currency_symbol("ZAR"), "ZAR");
/// ```
pub fn currency_symbol(code: &str) -> &str {
    match code {
        "KES" => "Ksh",
        "USD" => "US$",
        "EUR" => "€",
        "GBP" => "£",
        "UGX" => "USh",
        "TZS" => "TSh",
        other => other,
    }
}

/// Insert `,` between groups of three integer digits
///
/// # Examples
/// ```
/// use bizsuite::logic::formatting::group_thousands;
///
/// assert_eq!(group_thousands("0"), "0");
/// assert_eq!(group_thousands("1500"), "1,500");
/// assert_eq!(group_thousands("1234567"), "1,234,567");
/// ```
pub fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Round `|amount|` half away from zero to two fractional digits
///
/// Works on the shortest decimal representation of the float, so `1.005`
/// rounds to `1.01` the way a locale engine would show it.
///
/// # Returns
/// `(integer_digits, cent_digits)` with exactly two cent digits
pub fn round_to_cents(amount: f64) -> (String, String) {
    let repr = format!("{}", amount.abs());
    let (int_part, frac_part) = repr.split_once('.').unwrap_or((repr.as_str(), ""));

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().chain(std::iter::repeat(b'0')).take(2))
        .map(|b| b - b'0')
        .collect();

    let round_up = frac_part.as_bytes().get(2).is_some_and(|d| *d >= b'5');
    if round_up {
        let mut carried = true;
        for digit in digits.iter_mut().rev() {
            if *digit == 9 {
                *digit = 0;
            } else {
                *digit += 1;
                carried = false;
                break;
            }
        }
        if carried {
            digits.insert(0, 1);
        }
    }

    let split = digits.len() - 2;
    let to_string = |ds: &[u8]| ds.iter().map(|d| char::from(b'0' + d)).collect::<String>();
    (to_string(&digits[..split]), to_string(&digits[split..]))
}

/// Format an amount using the en-KE currency convention
///
/// Whole results have no decimals, anything with a fraction gets exactly two.
///
/// # Examples
/// ```
/// use bizsuite::logic::formatting::format_currency_en_ke;
///
/// assert_eq!(format_currency_en_ke(1500.0, "KES"), "Ksh\u{a0}1,500");
/// assert_eq!(format_currency_en_ke(1500.5, "KES"), "Ksh\u{a0}1,500.50");
/// assert_eq!(format_currency_en_ke(-20.0, "USD"), "-US$20");
/// ```
pub fn format_currency_en_ke(amount: f64, currency: &str) -> String {
    let code = currency.trim().to_ascii_uppercase();
    let symbol = currency_symbol(&code);
    let prefix = if symbol.chars().last().is_some_and(char::is_alphabetic) {
        format!("{}{}", symbol, SYMBOL_SPACE)
    } else {
        symbol.to_string()
    };

    if amount.is_nan() {
        return format!("{}NaN", prefix);
    }
    if amount.is_infinite() {
        let sign = if amount < 0.0 { "-" } else { "" };
        return format!("{}{}∞", sign, prefix);
    }

    let (whole, cents) = round_to_cents(amount);
    let is_zero = whole.bytes().all(|b| b == b'0') && cents == "00";
    let sign = if amount.is_sign_negative() && !is_zero { "-" } else { "" };

    if cents == "00" {
        format!("{}{}{}", sign, prefix, group_thousands(&whole))
    } else {
        format!("{}{}{}.{}", sign, prefix, group_thousands(&whole), cents)
    }
}

/// Parse a date or date-time string into the display time zone `offset`
///
/// Accepted inputs, in order:
/// - RFC 3339 (`2024-01-15T10:30:00Z`, `2024-01-15T10:30:00+01:00`)
/// - RFC 2822 (`Mon, 15 Jan 2024 10:30:00 +0000`)
/// - naive date-time (`2024-01-15 10:30:00`, `2024-01-15T10:30`), kept as local wall-clock
/// - date only (`2024-01-15`), read as UTC midnight
pub fn parse_date_input(
    input: &str,
    offset: FixedOffset,
) -> Result<DateTime<FixedOffset>, FormatError> {
    let input = input.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt.with_timezone(&offset));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(input) {
        return Ok(dt.with_timezone(&offset));
    }

    for layout in NAIVE_DATE_TIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(input, layout) {
            return offset
                .from_local_datetime(&naive)
                .single()
                .ok_or_else(|| FormatError::InvalidDate(input.to_string()));
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Ok(midnight.and_utc().with_timezone(&offset));
        }
    }

    Err(FormatError::InvalidDate(input.to_string()))
}

/// Render a date-time as `Jan 15, 2024, 10:30 AM`
pub fn render_date_time<Tz: TimeZone>(dt: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    dt.format(DATE_PATTERN).to_string()
}

/// Offset from a signed number of minutes east of UTC
pub fn offset_from_minutes(minutes: i32) -> Result<FixedOffset, FormatError> {
    minutes
        .checked_mul(60)
        .and_then(FixedOffset::east_opt)
        .ok_or(FormatError::InvalidOffset(minutes))
}
