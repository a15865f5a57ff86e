use async_trait::async_trait;
use tracing::info;

use crate::modules::contact::application::ports::incoming::use_cases::{
    CreateContactCommand, CreateContactError, CreateContactUseCase,
};
use crate::modules::contact::application::ports::outgoing::{
    ContactRepository, ContactRepositoryError, ContactResult,
};

pub struct CreateContactService<R>
where
    R: ContactRepository,
{
    contact_repository: R,
}

impl<R> CreateContactService<R>
where
    R: ContactRepository,
{
    pub fn new(contact_repository: R) -> Self {
        Self { contact_repository }
    }
}

#[async_trait]
impl<R> CreateContactUseCase for CreateContactService<R>
where
    R: ContactRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: CreateContactCommand,
    ) -> Result<ContactResult, CreateContactError> {
        let created = self
            .contact_repository
            .create_contact(command.into_data())
            .await
            .map_err(|e| match e {
                ContactRepositoryError::AlreadyExists => CreateContactError::AlreadyExists,
                ContactRepositoryError::CvNotFound => CreateContactError::CvNotFound,
                other => CreateContactError::RepositoryError(other.to_string()),
            })?;

        info!(
            contact_id = created.id,
            cv_id = created.cv_id,
            contact_type = %created.contact_type,
            "Contact created"
        );
        Ok(created)
    }
}
