use async_trait::async_trait;

use crate::modules::cv::application::ports::incoming::use_cases::{
    GetSingleCvError, GetSingleCvUseCase,
};
use crate::modules::cv::application::ports::outgoing::{CvDetailView, CvQuery, CvQueryError};

pub struct GetSingleCvService<Q>
where
    Q: CvQuery,
{
    query: Q,
}

impl<Q> GetSingleCvService<Q>
where
    Q: CvQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetSingleCvUseCase for GetSingleCvService<Q>
where
    Q: CvQuery + Send + Sync,
{
    async fn execute(&self, cv_id: i32) -> Result<CvDetailView, GetSingleCvError> {
        self.query.get_detail(cv_id).await.map_err(|e| match e {
            CvQueryError::NotFound => GetSingleCvError::NotFound,
            CvQueryError::DatabaseError(msg) => GetSingleCvError::QueryFailed(msg),
        })
    }
}
