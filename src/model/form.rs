//! Form input values
//!
//! Page scripts collect widget values into a [`FormData`] map. Values are
//! loosely typed, so they are modelled as a closed variant type.

use serde::Deserialize;
use std::collections::HashMap;

/// Field name to value. A missing key means the field is absent.
pub type FormData = HashMap<String, FieldValue>;

/// A single form value as read from an input widget
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
}

impl FieldValue {
    /// String representation used for blank checks
    ///
    /// Integral numbers render without a fractional part (`0`, `1500`),
    /// matching how the page scripts stringify numbers.
    pub fn display_string(&self) -> String {
        match self {
            FieldValue::Null => String::new(),
            FieldValue::Bool(b) => b.to_string(),
            FieldValue::Number(n) if n.is_nan() => "NaN".to_string(),
            FieldValue::Number(n) if n.is_infinite() => {
                if n.is_sign_negative() {
                    "-Infinity".to_string()
                } else {
                    "Infinity".to_string()
                }
            }
            // -0 prints as "0"
            FieldValue::Number(n) if *n == 0.0 => "0".to_string(),
            FieldValue::Number(n) => n.to_string(),
            FieldValue::Text(s) => s.clone(),
        }
    }

    /// Absent, null, or whitespace-only after string conversion
    ///
    /// `Number(0.0)` and `Bool(false)` are present values, not blank.
    pub fn is_blank(&self) -> bool {
        match self {
            FieldValue::Null => true,
            other => other.display_string().trim().is_empty(),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Number(value as f64)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Number(f64::from(value))
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(FieldValue::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_string_integral_number() {
        assert_eq!(FieldValue::Number(0.0).display_string(), "0");
        assert_eq!(FieldValue::Number(-0.0).display_string(), "0");
        assert_eq!(FieldValue::Number(1500.0).display_string(), "1500");
        assert_eq!(FieldValue::Number(2.5).display_string(), "2.5");
    }

    #[test]
    fn test_display_string_non_finite() {
        assert_eq!(FieldValue::Number(f64::NAN).display_string(), "NaN");
        assert_eq!(FieldValue::Number(f64::INFINITY).display_string(), "Infinity");
        assert_eq!(
            FieldValue::Number(f64::NEG_INFINITY).display_string(),
            "-Infinity"
        );
    }

    #[test]
    fn test_falsy_values_are_not_blank() {
        assert!(!FieldValue::Number(0.0).is_blank());
        assert!(!FieldValue::Bool(false).is_blank());
        assert!(!FieldValue::Number(f64::NAN).is_blank());
    }

    #[test]
    fn test_blank_values() {
        assert!(FieldValue::Null.is_blank());
        assert!(FieldValue::from("").is_blank());
        assert!(FieldValue::from("  \t\n").is_blank());
        assert!(!FieldValue::from(" x ").is_blank());
    }

    #[test]
    fn test_from_option() {
        assert_eq!(FieldValue::from(None::<&str>), FieldValue::Null);
        assert_eq!(FieldValue::from(Some(3)), FieldValue::Number(3.0));
    }

    #[test]
    fn test_deserialize_untagged() {
        let data: FormData =
            serde_json::from_str(r#"{"name":"Jane","qty":0,"paid":false,"note":null}"#).unwrap();
        assert_eq!(data["name"], FieldValue::Text("Jane".to_string()));
        assert_eq!(data["qty"], FieldValue::Number(0.0));
        assert_eq!(data["paid"], FieldValue::Bool(false));
        assert_eq!(data["note"], FieldValue::Null);
    }
}
