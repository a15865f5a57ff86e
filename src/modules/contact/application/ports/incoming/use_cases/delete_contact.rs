use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteContactError {
    #[error("Contact not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteContactUseCase: Send + Sync {
    async fn execute(&self, contact_id: i32) -> Result<(), DeleteContactError>;
}
