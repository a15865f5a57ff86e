use async_trait::async_trait;

use crate::modules::cv::application::ports::outgoing::{CvResult, PatchCvData};
use crate::modules::cv::domain::{
    normalize_bio, validate_email, validate_firstname, validate_lastname, validate_phone,
};
use crate::shared::validation::FieldError;

//
// ──────────────────────────────────────────────────────────
// Patch CV Command
// ──────────────────────────────────────────────────────────
//

/// Only the provided fields are validated and written.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PatchCvCommand {
    data: PatchCvData,
}

impl PatchCvCommand {
    pub fn new(
        firstname: Option<&str>,
        lastname: Option<&str>,
        email: Option<&str>,
        phone: Option<&str>,
        bio: Option<&str>,
    ) -> Result<Self, FieldError> {
        Ok(Self {
            data: PatchCvData {
                firstname: firstname.map(validate_firstname).transpose()?,
                lastname: lastname.map(validate_lastname).transpose()?,
                email: email.map(validate_email).transpose()?,
                phone: phone.map(validate_phone).transpose()?,
                bio: bio.map(normalize_bio),
            },
        })
    }

    pub fn into_data(self) -> PatchCvData {
        self.data
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum PatchCvError {
    #[error("CV not found")]
    NotFound,

    #[error("A CV with this email already exists.")]
    EmailAlreadyExists,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait PatchCvUseCase: Send + Sync {
    async fn execute(&self, cv_id: i32, command: PatchCvCommand) -> Result<CvResult, PatchCvError>;
}
