use async_trait::async_trait;
use tracing::info;

use crate::modules::contact::application::ports::incoming::use_cases::{
    CreateContactCommand, PatchContactCommand, PatchContactUseCase, UpdateContactError,
    UpdateContactUseCase,
};
use crate::modules::contact::application::ports::outgoing::{
    ContactRepository, ContactRepositoryError, ContactResult,
};

fn map_repo_err(e: ContactRepositoryError) -> UpdateContactError {
    match e {
        ContactRepositoryError::NotFound => UpdateContactError::NotFound,
        ContactRepositoryError::AlreadyExists => UpdateContactError::AlreadyExists,
        ContactRepositoryError::CvNotFound => UpdateContactError::CvNotFound,
        ContactRepositoryError::DatabaseError(msg) => UpdateContactError::RepositoryError(msg),
    }
}

pub struct UpdateContactService<R>
where
    R: ContactRepository,
{
    contact_repository: R,
}

impl<R> UpdateContactService<R>
where
    R: ContactRepository,
{
    pub fn new(contact_repository: R) -> Self {
        Self { contact_repository }
    }
}

#[async_trait]
impl<R> UpdateContactUseCase for UpdateContactService<R>
where
    R: ContactRepository + Send + Sync,
{
    async fn execute(
        &self,
        contact_id: i32,
        command: CreateContactCommand,
    ) -> Result<ContactResult, UpdateContactError> {
        let updated = self
            .contact_repository
            .update_contact(contact_id, command.into_data())
            .await
            .map_err(map_repo_err)?;

        info!(contact_id, "Contact updated");
        Ok(updated)
    }
}

pub struct PatchContactService<R>
where
    R: ContactRepository,
{
    contact_repository: R,
}

impl<R> PatchContactService<R>
where
    R: ContactRepository,
{
    pub fn new(contact_repository: R) -> Self {
        Self { contact_repository }
    }
}

#[async_trait]
impl<R> PatchContactUseCase for PatchContactService<R>
where
    R: ContactRepository + Send + Sync,
{
    async fn execute(
        &self,
        contact_id: i32,
        command: PatchContactCommand,
    ) -> Result<ContactResult, UpdateContactError> {
        let updated = self
            .contact_repository
            .patch_contact(contact_id, command.into_data())
            .await
            .map_err(map_repo_err)?;

        info!(contact_id, "Contact patched");
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::contact::application::service::test_doubles::{
        sample_contact, MockContactRepo,
    };
    use crate::modules::contact::domain::ContactType;

    #[tokio::test]
    async fn patch_forwards_new_type() {
        let service = PatchContactService::new(MockContactRepo::new(Ok(sample_contact(1, 1))));
        let command = PatchContactCommand::new(None, Some(ContactType::Website), None, None).unwrap();

        service.execute(1, command).await.unwrap();

        let seen = service
            .contact_repository
            .last_patch
            .lock()
            .unwrap()
            .clone()
            .unwrap();
        assert_eq!(seen.contact_type, Some(ContactType::Website));
    }

    #[tokio::test]
    async fn update_maps_duplicate_type() {
        let service = UpdateContactService::new(MockContactRepo::new(Err(
            ContactRepositoryError::AlreadyExists,
        )));
        let command =
            CreateContactCommand::new(1, ContactType::Github, "ada", "https://github.com/ada")
                .unwrap();

        assert!(matches!(
            service.execute(1, command).await.unwrap_err(),
            UpdateContactError::AlreadyExists
        ));
    }
}
