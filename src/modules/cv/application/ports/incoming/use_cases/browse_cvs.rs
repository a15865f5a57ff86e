use async_trait::async_trait;

use crate::modules::cv::application::ports::outgoing::CvSummaryView;
use crate::shared::pagination::{PageRequest, PageResult};

#[derive(Debug, Clone, thiserror::Error)]
pub enum BrowseCvsError {
    #[error("Failed to fetch CVs: {0}")]
    QueryFailed(String),
}

/// Paged summaries for the HTML list page.
#[async_trait]
pub trait BrowseCvsUseCase: Send + Sync {
    async fn execute(&self, page: PageRequest) -> Result<PageResult<CvSummaryView>, BrowseCvsError>;
}
