use crate::shared::validation::{is_valid_email, FieldError};

pub const DEFAULT_SENDER_NAME: &str = "CV Management System";
pub const PDF_CONTENT_TYPE: &str = "application/pdf";

#[derive(Debug, Clone, PartialEq)]
pub struct Attachment {
    pub filename: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// A multipart message: plain text and HTML alternatives plus attachments.
#[derive(Debug, Clone, PartialEq)]
pub struct OutgoingEmail {
    pub to: String,
    pub subject: String,
    pub text_body: String,
    pub html_body: String,
    pub attachments: Vec<Attachment>,
}

pub fn validate_recipient(raw: Option<&str>) -> Result<String, FieldError> {
    let email = raw.map(str::trim).unwrap_or_default();
    if email.is_empty() {
        return Err(FieldError::new("email", "Email address is required"));
    }
    if !is_valid_email(email) {
        return Err(FieldError::new("email", "Please enter a valid email address"));
    }
    Ok(email.to_string())
}

/// Blank sender names fall back to the application name.
pub fn sender_display_name(raw: Option<&str>) -> String {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_SENDER_NAME)
        .to_string()
}

pub fn cv_email_subject(full_name: &str) -> String {
    format!("CV: {full_name}")
}
