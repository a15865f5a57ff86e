use async_trait::async_trait;

use crate::modules::cv::application::ports::outgoing::{CreateCvData, CvResult};
use crate::modules::cv::domain::{
    normalize_bio, validate_email, validate_firstname, validate_lastname, validate_phone,
};
use crate::shared::validation::FieldError;

//
// ──────────────────────────────────────────────────────────
// Create CV Command
// ──────────────────────────────────────────────────────────
//

/// Validated CV fields. Also used for full updates (PUT).
#[derive(Debug, Clone, PartialEq)]
pub struct CreateCvCommand {
    data: CreateCvData,
}

impl CreateCvCommand {
    pub fn new(
        firstname: &str,
        lastname: &str,
        email: &str,
        phone: &str,
        bio: &str,
    ) -> Result<Self, FieldError> {
        Ok(Self {
            data: CreateCvData {
                firstname: validate_firstname(firstname)?,
                lastname: validate_lastname(lastname)?,
                email: validate_email(email)?,
                phone: validate_phone(phone)?,
                bio: normalize_bio(bio),
            },
        })
    }

    pub fn email(&self) -> &str {
        &self.data.email
    }

    pub fn into_data(self) -> CreateCvData {
        self.data
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateCvError {
    #[error("A CV with this email already exists.")]
    EmailAlreadyExists,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateCvUseCase: Send + Sync {
    async fn execute(&self, command: CreateCvCommand) -> Result<CvResult, CreateCvError>;
}
