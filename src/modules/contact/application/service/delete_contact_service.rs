use async_trait::async_trait;
use tracing::info;

use crate::modules::contact::application::ports::incoming::use_cases::{
    DeleteContactError, DeleteContactUseCase,
};
use crate::modules::contact::application::ports::outgoing::{
    ContactRepository, ContactRepositoryError,
};

pub struct DeleteContactService<R>
where
    R: ContactRepository,
{
    contact_repository: R,
}

impl<R> DeleteContactService<R>
where
    R: ContactRepository,
{
    pub fn new(contact_repository: R) -> Self {
        Self { contact_repository }
    }
}

#[async_trait]
impl<R> DeleteContactUseCase for DeleteContactService<R>
where
    R: ContactRepository + Send + Sync,
{
    async fn execute(&self, contact_id: i32) -> Result<(), DeleteContactError> {
        self.contact_repository
            .delete_contact(contact_id)
            .await
            .map_err(|e| match e {
                ContactRepositoryError::NotFound => DeleteContactError::NotFound,
                other => DeleteContactError::RepositoryError(other.to_string()),
            })?;

        info!(contact_id, "Contact deleted");
        Ok(())
    }
}
