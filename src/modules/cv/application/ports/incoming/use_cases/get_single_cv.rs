use async_trait::async_trait;

use crate::modules::cv::application::ports::outgoing::CvDetailView;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetSingleCvError {
    #[error("CV not found")]
    NotFound,

    #[error("Failed to fetch CV: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetSingleCvUseCase: Send + Sync {
    async fn execute(&self, cv_id: i32) -> Result<CvDetailView, GetSingleCvError>;
}
