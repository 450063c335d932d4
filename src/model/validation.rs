use serde_json::{json, Value};

/// Outcome of a required-field check
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    Invalid { field: String, message: String },
}

impl ValidationResult {
    /// Failure for `field` with the standard "<field> is required" message
    pub fn missing(field: &str) -> Self {
        ValidationResult::Invalid {
            field: field.to_string(),
            message: format!("{} is required", field),
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }

    /// Name of the failing field, if any
    pub fn field(&self) -> Option<&str> {
        match self {
            ValidationResult::Valid => None,
            ValidationResult::Invalid { field, .. } => Some(field),
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            ValidationResult::Valid => None,
            ValidationResult::Invalid { message, .. } => Some(message),
        }
    }

    /// `{"valid": true}` or `{"valid": false, "field": ..., "message": ...}`
    pub fn to_json(&self) -> Value {
        match self {
            ValidationResult::Valid => json!({ "valid": true }),
            ValidationResult::Invalid { field, message } => json!({
                "valid": false,
                "field": field,
                "message": message,
            }),
        }
    }
}
