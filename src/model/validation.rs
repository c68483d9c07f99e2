//! Field rules for customer input
//!
//! Each field carries exactly one rule, so a failing field yields exactly
//! one message. Messages are reported in field declaration order.

use std::borrow::Cow;

use validator::{ValidateEmail, ValidationError, ValidationErrors};

/// Struct field name paired with its JSON name, in declaration order.
const FIELDS: [(&str, &str); 3] = [
    ("first_name", "firstName"),
    ("last_name", "lastName"),
    ("email", "email"),
];

fn rule(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(message));
    err
}

pub(super) fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(rule("not_blank", "must not be empty"));
    }
    Ok(())
}

pub(super) fn email_address(value: &str) -> Result<(), ValidationError> {
    not_blank(value)?;
    if !value.validate_email() {
        return Err(rule("email", "must be a well-formed email address"));
    }
    Ok(())
}

/// Render validation failures as `Field 'x' <message>` lines.
pub fn field_messages(errors: &ValidationErrors) -> Vec<String> {
    let by_field = errors.field_errors();

    FIELDS
        .iter()
        .filter_map(|(field, json_name)| {
            let err = by_field.get(*field)?.first()?;
            let message = err
                .message
                .as_deref()
                .unwrap_or("is invalid");
            Some(format!("Field '{}' {}", json_name, message))
        })
        .collect()
}
