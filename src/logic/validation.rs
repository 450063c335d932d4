//! Required-field validation
//!
//! Pure check of a form against an ordered list of required field names.

use crate::model::{FormData, ValidationResult};

/// Check `required_fields` against `form_data`, in order
///
/// A field fails when it is absent, null, or blank after trimming its string
/// form. The first failure is returned and later fields are not examined.
/// Present-but-falsy values such as `0` and `false` pass.
///
/// # Examples
/// ```
/// use bizsuite::logic::validation::validate_required;
/// use bizsuite::{FieldValue, FormData, ValidationResult};
///
/// let mut form = FormData::new();
/// form.insert("name".to_string(), FieldValue::from(""));
/// form.insert("email".to_string(), FieldValue::from("x@y.com"));
///
/// assert_eq!(
///     validate_required(&form, &["name", "email"]),
///     ValidationResult::missing("name"),
/// );
/// ```
pub fn validate_required<S: AsRef<str>>(
    form_data: &FormData,
    required_fields: &[S],
) -> ValidationResult {
    required_fields
        .iter()
        .map(AsRef::as_ref)
        .find(|field| is_field_blank(form_data, field))
        .map(ValidationResult::missing)
        .unwrap_or(ValidationResult::Valid)
}

/// Whether `field` is absent from `form_data` or carries a blank value
pub fn is_field_blank(form_data: &FormData, field: &str) -> bool {
    form_data
        .get(field)
        .map(|value| value.is_blank())
        .unwrap_or(true)
}
