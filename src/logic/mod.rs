//! Business Logic
//!
//! This module contains pure functions that can be unit tested:
//! - errors: Notification and diagnostic text for reported errors
//! - formatting: en-KE currency and date formatting primitives
//! - ui: Spinner animation and alert sizing
//! - validation: Required-field checks

pub mod errors;
pub mod formatting;
pub mod ui;
pub mod validation;
