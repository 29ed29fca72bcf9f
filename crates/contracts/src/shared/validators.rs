//! Field validators shared by form widgets.
//!
//! Every validator returns `None` when the value is acceptable and the
//! (already formatted) message otherwise.

use std::collections::BTreeMap;

/// Validation outcome of a single field.
pub type FieldError = Option<String>;

/// Errors keyed by field name. Absent key means the field is valid.
pub type FormErrors = BTreeMap<String, String>;

pub const DEFAULT_REQUIRED_MESSAGE: &str = "Field is required";
pub const DEFAULT_MIN_LENGTH_MESSAGE: &str = "{min} characters required at least";
pub const DEFAULT_EMAIL_MESSAGE: &str = "Email is invalid";

pub fn validate_required(value: &str, message: &str) -> FieldError {
    value.is_empty().then(|| message.to_string())
}

/// Fails for non-empty values shorter than `min` characters.
///
/// A `{min}` placeholder in `message` is replaced with the limit. Empty
/// values pass: combine with [`validate_required`] when the field is mandatory.
pub fn validate_min_length(value: &str, min: usize, message: &str) -> FieldError {
    (!value.is_empty() && value.chars().count() < min)
        .then(|| message.replace("{min}", &min.to_string()))
}

/// Deliberately loose: a non-empty value only needs an `@`.
pub fn validate_email(value: &str, message: &str) -> FieldError {
    (!value.is_empty() && !value.contains('@')).then(|| message.to_string())
}

pub fn has_errors(errors: &FormErrors) -> bool {
    errors.values().any(|message| !message.is_empty())
}
