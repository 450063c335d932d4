//! Helper data model
//!
//! Plain values passed into and returned from the helpers. None of them
//! outlives a single helper call:
//!
//! - **FormData / FieldValue**: field name to loosely-typed input value
//! - **ValidationResult**: outcome of a required-field check
//! - **ErrorInfo**: an already-caught error with an optional message

pub mod error_info;
pub mod form;
pub mod validation;

pub use error_info::ErrorInfo;
pub use form::{FieldValue, FormData};
pub use validation::ValidationResult;
