use chrono::NaiveDate;

use crate::shared::validation::{is_http_url, max_length, optional_text, required_text, FieldError};

pub const PROJECT_TITLE_MAX_CHARS: usize = 200;
pub const PROJECT_TECHNOLOGIES_MAX_CHARS: usize = 500;
pub const PROJECT_URL_MAX_CHARS: usize = 200;

pub fn validate_title(raw: &str) -> Result<String, FieldError> {
    required_text("title", raw, PROJECT_TITLE_MAX_CHARS)
}

pub fn validate_technologies(raw: &str) -> Result<String, FieldError> {
    optional_text("technologies", raw, PROJECT_TECHNOLOGIES_MAX_CHARS)
}

/// Blank URLs are stored as NULL.
pub fn validate_url(raw: Option<&str>) -> Result<Option<String>, FieldError> {
    let Some(url) = raw.map(str::trim).filter(|u| !u.is_empty()) else {
        return Ok(None);
    };
    if !is_http_url(url) {
        return Err(FieldError::new("url", "Enter a valid URL."));
    }
    max_length("url", url, PROJECT_URL_MAX_CHARS)?;
    Ok(Some(url.to_string()))
}

pub fn validate_date_range(start: NaiveDate, end: Option<NaiveDate>) -> Result<(), FieldError> {
    match end {
        Some(end) if end < start => Err(FieldError::new(
            "end_date",
            "End date must be after start date.",
        )),
        _ => Ok(()),
    }
}

/// Split the comma separated technologies column.
pub fn technologies_list(technologies: &str) -> Vec<String> {
    technologies
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn is_ongoing(end_date: Option<NaiveDate>) -> bool {
    end_date.is_none()
}
