use async_trait::async_trait;
use std::sync::Mutex;

use crate::modules::contact::application::ports::outgoing::{
    ContactQuery, ContactQueryError, ContactRepository, ContactRepositoryError, ContactResult,
    CreateContactData, PatchContactData, UpdateContactData,
};
use crate::modules::contact::domain::ContactType;

pub fn sample_contact(id: i32, cv_id: i32) -> ContactResult {
    ContactResult {
        id,
        cv_id,
        contact_type: ContactType::Github,
        value: "ada".to_string(),
        url: "https://github.com/ada".to_string(),
    }
}

pub struct MockContactRepo {
    pub result: Result<ContactResult, ContactRepositoryError>,
    pub last_patch: Mutex<Option<PatchContactData>>,
}

impl MockContactRepo {
    pub fn new(result: Result<ContactResult, ContactRepositoryError>) -> Self {
        Self {
            result,
            last_patch: Mutex::new(None),
        }
    }
}

#[async_trait]
impl ContactRepository for MockContactRepo {
    async fn create_contact(
        &self,
        _data: CreateContactData,
    ) -> Result<ContactResult, ContactRepositoryError> {
        self.result.clone()
    }

    async fn update_contact(
        &self,
        _contact_id: i32,
        _data: UpdateContactData,
    ) -> Result<ContactResult, ContactRepositoryError> {
        self.result.clone()
    }

    async fn patch_contact(
        &self,
        _contact_id: i32,
        data: PatchContactData,
    ) -> Result<ContactResult, ContactRepositoryError> {
        *self.last_patch.lock().unwrap() = Some(data);
        self.result.clone()
    }

    async fn delete_contact(&self, _contact_id: i32) -> Result<(), ContactRepositoryError> {
        self.result.clone().map(|_| ())
    }
}

pub struct MockContactQuery {
    pub result: Result<Vec<ContactResult>, ContactQueryError>,
}

#[async_trait]
impl ContactQuery for MockContactQuery {
    async fn get_by_id(&self, contact_id: i32) -> Result<ContactResult, ContactQueryError> {
        self.result
            .clone()?
            .into_iter()
            .find(|c| c.id == contact_id)
            .ok_or(ContactQueryError::NotFound)
    }

    async fn list(&self, cv_id: Option<i32>) -> Result<Vec<ContactResult>, ContactQueryError> {
        Ok(self
            .result
            .clone()?
            .into_iter()
            .filter(|c| cv_id.map_or(true, |cv| c.cv_id == cv))
            .collect())
    }

    async fn list_for_cv(&self, cv_id: i32) -> Result<Vec<ContactResult>, ContactQueryError> {
        self.list(Some(cv_id)).await
    }
}
