use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteCvError {
    #[error("CV not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteCvUseCase: Send + Sync {
    async fn execute(&self, cv_id: i32) -> Result<(), DeleteCvError>;
}
