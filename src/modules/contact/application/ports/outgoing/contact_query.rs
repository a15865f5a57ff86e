use async_trait::async_trait;

use crate::modules::contact::application::ports::outgoing::ContactResult;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ContactQueryError {
    #[error("Contact not found")]
    NotFound,

    #[error("CV not found")]
    CvNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ContactQuery: Send + Sync {
    async fn get_by_id(&self, contact_id: i32) -> Result<ContactResult, ContactQueryError>;

    /// Ordered by contact type, optionally restricted to one CV.
    async fn list(&self, cv_id: Option<i32>) -> Result<Vec<ContactResult>, ContactQueryError>;

    async fn list_for_cv(&self, cv_id: i32) -> Result<Vec<ContactResult>, ContactQueryError>;
}
