use crate::shared::validation::{max_length, FieldError};

pub const SKILL_NAME_MAX_CHARS: usize = 100;

/// Skill names are stored trimmed and must not be blank.
pub fn validate_skill_name(raw: &str) -> Result<String, FieldError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(FieldError::new("name", "Skill name cannot be empty."));
    }
    max_length("name", name, SKILL_NAME_MAX_CHARS)?;
    Ok(name.to_string())
}
