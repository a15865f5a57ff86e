use async_trait::async_trait;

use crate::modules::contact::application::ports::outgoing::ContactResult;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetContactsError {
    #[error("Failed to fetch contacts: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetContactsUseCase: Send + Sync {
    async fn execute(&self, cv_id: Option<i32>) -> Result<Vec<ContactResult>, GetContactsError>;
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetCvContactsError {
    #[error("CV not found")]
    CvNotFound,

    #[error("Failed to fetch contacts: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetCvContactsUseCase: Send + Sync {
    async fn execute(&self, cv_id: i32) -> Result<Vec<ContactResult>, GetCvContactsError>;
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetSingleContactError {
    #[error("Contact not found")]
    NotFound,

    #[error("Failed to fetch contact: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetSingleContactUseCase: Send + Sync {
    async fn execute(&self, contact_id: i32) -> Result<ContactResult, GetSingleContactError>;
}
