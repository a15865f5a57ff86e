mod contact_type;

pub use contact_type::ContactType;

use crate::shared::validation::{is_http_url, max_length, required_text, FieldError};

pub const CONTACT_VALUE_MAX_CHARS: usize = 200;
pub const CONTACT_URL_MAX_CHARS: usize = 200;

pub fn validate_contact_value(raw: &str) -> Result<String, FieldError> {
    required_text("value", raw, CONTACT_VALUE_MAX_CHARS)
}

pub fn validate_contact_url(raw: &str) -> Result<String, FieldError> {
    let url = raw.trim();
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(FieldError::new(
            "url",
            "URL must start with http:// or https://",
        ));
    }
    if !is_http_url(url) {
        return Err(FieldError::new("url", "Enter a valid URL."));
    }
    max_length("url", url, CONTACT_URL_MAX_CHARS)?;
    Ok(url.to_string())
}
