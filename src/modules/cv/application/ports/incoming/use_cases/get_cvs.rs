use async_trait::async_trait;

use crate::modules::cv::application::ports::outgoing::{CvDetailView, CvListFilter};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetCvsError {
    #[error("Failed to fetch CVs: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetCvsUseCase: Send + Sync {
    async fn execute(&self, filter: CvListFilter) -> Result<Vec<CvDetailView>, GetCvsError>;
}
