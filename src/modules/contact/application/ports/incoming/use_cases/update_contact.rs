use async_trait::async_trait;

use crate::modules::contact::application::ports::incoming::use_cases::CreateContactCommand;
use crate::modules::contact::application::ports::outgoing::{ContactResult, PatchContactData};
use crate::modules::contact::domain::{validate_contact_url, validate_contact_value, ContactType};
use crate::shared::validation::FieldError;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PatchContactCommand {
    data: PatchContactData,
}

impl PatchContactCommand {
    pub fn new(
        cv_id: Option<i32>,
        contact_type: Option<ContactType>,
        value: Option<&str>,
        url: Option<&str>,
    ) -> Result<Self, FieldError> {
        Ok(Self {
            data: PatchContactData {
                cv_id,
                contact_type,
                value: value.map(validate_contact_value).transpose()?,
                url: url.map(validate_contact_url).transpose()?,
            },
        })
    }

    pub fn into_data(self) -> PatchContactData {
        self.data
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateContactError {
    #[error("Contact not found")]
    NotFound,

    #[error("A contact with this type already exists for this CV.")]
    AlreadyExists,

    #[error("CV not found")]
    CvNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateContactUseCase: Send + Sync {
    async fn execute(
        &self,
        contact_id: i32,
        command: CreateContactCommand,
    ) -> Result<ContactResult, UpdateContactError>;
}

#[async_trait]
pub trait PatchContactUseCase: Send + Sync {
    async fn execute(
        &self,
        contact_id: i32,
        command: PatchContactCommand,
    ) -> Result<ContactResult, UpdateContactError>;
}
