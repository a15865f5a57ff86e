use async_trait::async_trait;

use crate::modules::cv::application::ports::incoming::use_cases::{GetCvsError, GetCvsUseCase};
use crate::modules::cv::application::ports::outgoing::{CvDetailView, CvListFilter, CvQuery};

pub struct GetCvsService<Q>
where
    Q: CvQuery,
{
    query: Q,
}

impl<Q> GetCvsService<Q>
where
    Q: CvQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetCvsUseCase for GetCvsService<Q>
where
    Q: CvQuery + Send + Sync,
{
    async fn execute(&self, filter: CvListFilter) -> Result<Vec<CvDetailView>, GetCvsError> {
        // Blank filters behave as absent ones.
        let filter = CvListFilter {
            email: filter.email.filter(|v| !v.trim().is_empty()),
            name: filter.name.filter(|v| !v.trim().is_empty()),
        };

        self.query
            .list_details(filter)
            .await
            .map_err(|e| GetCvsError::QueryFailed(e.to_string()))
    }
}
