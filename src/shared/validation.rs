// src/shared/validation.rs

/// A single rejected input field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field}: {message}")]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Trim and require a non-empty value of at most `max_chars` characters.
pub fn required_text(field: &'static str, value: &str, max_chars: usize) -> Result<String, FieldError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FieldError::new(field, "This field may not be blank."));
    }
    max_length(field, trimmed, max_chars)?;
    Ok(trimmed.to_string())
}

/// Trim an optional-content field; empty is allowed.
pub fn optional_text(field: &'static str, value: &str, max_chars: usize) -> Result<String, FieldError> {
    let trimmed = value.trim();
    max_length(field, trimmed, max_chars)?;
    Ok(trimmed.to_string())
}

pub fn max_length(field: &'static str, value: &str, max_chars: usize) -> Result<(), FieldError> {
    if value.chars().count() > max_chars {
        return Err(FieldError::new(
            field,
            format!("Ensure this field has no more than {max_chars} characters."),
        ));
    }
    Ok(())
}

pub fn is_http_url(value: &str) -> bool {
    let rest = value
        .strip_prefix("https://")
        .or_else(|| value.strip_prefix("http://"));

    matches!(rest, Some(host) if !host.is_empty() && !host.starts_with('/') && !host.contains(char::is_whitespace))
}

pub fn is_valid_email(value: &str) -> bool {
    let value = value.trim();
    // email_address accepts quoted local parts with spaces; a CV address never needs them.
    !value.contains(char::is_whitespace)
        && value
            .split_once('@')
            .is_some_and(|(_, domain)| domain.contains('.') && !domain.ends_with('.'))
        && email_address::EmailAddress::is_valid(value)
}
