use async_trait::async_trait;

use crate::modules::contact::application::ports::outgoing::{ContactResult, CreateContactData};
use crate::modules::contact::domain::{validate_contact_url, validate_contact_value, ContactType};
use crate::shared::validation::FieldError;

/// Validated contact fields. Also used for full updates (PUT).
#[derive(Debug, Clone, PartialEq)]
pub struct CreateContactCommand {
    data: CreateContactData,
}

impl CreateContactCommand {
    pub fn new(
        cv_id: i32,
        contact_type: ContactType,
        value: &str,
        url: &str,
    ) -> Result<Self, FieldError> {
        Ok(Self {
            data: CreateContactData {
                cv_id,
                contact_type,
                value: validate_contact_value(value)?,
                url: validate_contact_url(url)?,
            },
        })
    }

    pub fn cv_id(&self) -> i32 {
        self.data.cv_id
    }

    pub fn into_data(self) -> CreateContactData {
        self.data
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateContactError {
    #[error("A contact with this type already exists for this CV.")]
    AlreadyExists,

    #[error("CV not found")]
    CvNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateContactUseCase: Send + Sync {
    async fn execute(
        &self,
        command: CreateContactCommand,
    ) -> Result<ContactResult, CreateContactError>;
}
