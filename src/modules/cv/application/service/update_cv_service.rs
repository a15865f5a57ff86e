use async_trait::async_trait;
use tracing::info;

use crate::modules::cv::application::ports::incoming::use_cases::{
    CreateCvCommand, UpdateCvError, UpdateCvUseCase,
};
use crate::modules::cv::application::ports::outgoing::{CvRepository, CvRepositoryError, CvResult};

pub struct UpdateCvService<R>
where
    R: CvRepository,
{
    cv_repository: R,
}

impl<R> UpdateCvService<R>
where
    R: CvRepository,
{
    pub fn new(cv_repository: R) -> Self {
        Self { cv_repository }
    }
}

#[async_trait]
impl<R> UpdateCvUseCase for UpdateCvService<R>
where
    R: CvRepository + Send + Sync,
{
    async fn execute(&self, cv_id: i32, command: CreateCvCommand) -> Result<CvResult, UpdateCvError> {
        let updated = self
            .cv_repository
            .update_cv(cv_id, command.into_data())
            .await
            .map_err(|e| match e {
                CvRepositoryError::NotFound => UpdateCvError::NotFound,
                CvRepositoryError::EmailAlreadyExists => UpdateCvError::EmailAlreadyExists,
                CvRepositoryError::DatabaseError(msg) => UpdateCvError::RepositoryError(msg),
            })?;

        info!(cv_id, "CV updated");
        Ok(updated)
    }
}
