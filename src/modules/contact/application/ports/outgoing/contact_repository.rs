use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::modules::contact::domain::ContactType;

#[derive(Debug, Clone, PartialEq)]
pub struct CreateContactData {
    pub cv_id: i32,
    pub contact_type: ContactType,
    pub value: String,
    pub url: String,
}

pub type UpdateContactData = CreateContactData;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PatchContactData {
    pub cv_id: Option<i32>,
    pub contact_type: Option<ContactType>,
    pub value: Option<String>,
    pub url: Option<String>,
}

impl PatchContactData {
    pub fn is_empty(&self) -> bool {
        self.cv_id.is_none()
            && self.contact_type.is_none()
            && self.value.is_none()
            && self.url.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactResult {
    pub id: i32,
    #[serde(rename = "cv")]
    pub cv_id: i32,
    pub contact_type: ContactType,
    pub value: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ContactRepositoryError {
    #[error("Contact not found")]
    NotFound,

    #[error("A contact with this type already exists for this CV.")]
    AlreadyExists,

    #[error("CV not found")]
    CvNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ContactRepository: Send + Sync {
    async fn create_contact(
        &self,
        data: CreateContactData,
    ) -> Result<ContactResult, ContactRepositoryError>;

    async fn update_contact(
        &self,
        contact_id: i32,
        data: UpdateContactData,
    ) -> Result<ContactResult, ContactRepositoryError>;

    async fn patch_contact(
        &self,
        contact_id: i32,
        data: PatchContactData,
    ) -> Result<ContactResult, ContactRepositoryError>;

    async fn delete_contact(&self, contact_id: i32) -> Result<(), ContactRepositoryError>;
}
