use async_trait::async_trait;

use crate::modules::cv::application::ports::incoming::use_cases::CreateCvCommand;
use crate::modules::cv::application::ports::outgoing::CvResult;

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateCvError {
    #[error("CV not found")]
    NotFound,

    #[error("A CV with this email already exists.")]
    EmailAlreadyExists,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateCvUseCase: Send + Sync {
    async fn execute(&self, cv_id: i32, command: CreateCvCommand) -> Result<CvResult, UpdateCvError>;
}
