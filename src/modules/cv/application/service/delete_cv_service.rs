use async_trait::async_trait;
use tracing::info;

use crate::modules::cv::application::ports::incoming::use_cases::{DeleteCvError, DeleteCvUseCase};
use crate::modules::cv::application::ports::outgoing::{CvRepository, CvRepositoryError};

pub struct DeleteCvService<R>
where
    R: CvRepository,
{
    cv_repository: R,
}

impl<R> DeleteCvService<R>
where
    R: CvRepository,
{
    pub fn new(cv_repository: R) -> Self {
        Self { cv_repository }
    }
}

#[async_trait]
impl<R> DeleteCvUseCase for DeleteCvService<R>
where
    R: CvRepository + Send + Sync,
{
    async fn execute(&self, cv_id: i32) -> Result<(), DeleteCvError> {
        self.cv_repository
            .delete_cv(cv_id)
            .await
            .map_err(|e| match e {
                CvRepositoryError::NotFound => DeleteCvError::NotFound,
                other => DeleteCvError::RepositoryError(other.to_string()),
            })?;

        info!(cv_id, "CV deleted");
        Ok(())
    }
}
