use crate::shared::validation::{is_valid_email, max_length, optional_text, required_text, FieldError};

pub const NAME_MAX_CHARS: usize = 100;
pub const EMAIL_MAX_CHARS: usize = 254;
pub const PHONE_MAX_CHARS: usize = 20;

pub fn validate_firstname(raw: &str) -> Result<String, FieldError> {
    required_text("firstname", raw, NAME_MAX_CHARS)
}

pub fn validate_lastname(raw: &str) -> Result<String, FieldError> {
    required_text("lastname", raw, NAME_MAX_CHARS)
}

pub fn validate_email(raw: &str) -> Result<String, FieldError> {
    let email = raw.trim();
    if email.is_empty() {
        return Err(FieldError::new("email", "This field may not be blank."));
    }
    if !is_valid_email(email) {
        return Err(FieldError::new("email", "Enter a valid email address."));
    }
    max_length("email", email, EMAIL_MAX_CHARS)?;
    Ok(email.to_string())
}

pub fn validate_phone(raw: &str) -> Result<String, FieldError> {
    optional_text("phone", raw, PHONE_MAX_CHARS)
}

pub fn normalize_bio(raw: &str) -> String {
    raw.trim().to_string()
}

pub fn full_name(firstname: &str, lastname: &str) -> String {
    format!("{firstname} {lastname}")
}
