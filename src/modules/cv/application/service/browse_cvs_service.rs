use async_trait::async_trait;

use crate::modules::cv::application::ports::incoming::use_cases::{BrowseCvsError, BrowseCvsUseCase};
use crate::modules::cv::application::ports::outgoing::{CvQuery, CvSummaryView};
use crate::shared::pagination::{PageRequest, PageResult};

pub struct BrowseCvsService<Q>
where
    Q: CvQuery,
{
    query: Q,
}

impl<Q> BrowseCvsService<Q>
where
    Q: CvQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> BrowseCvsUseCase for BrowseCvsService<Q>
where
    Q: CvQuery + Send + Sync,
{
    async fn execute(&self, page: PageRequest) -> Result<PageResult<CvSummaryView>, BrowseCvsError> {
        self.query
            .list_page(page)
            .await
            .map_err(|e| BrowseCvsError::QueryFailed(e.to_string()))
    }
}
