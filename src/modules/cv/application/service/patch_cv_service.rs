use async_trait::async_trait;
use tracing::info;

use crate::modules::cv::application::ports::incoming::use_cases::{
    PatchCvCommand, PatchCvError, PatchCvUseCase,
};
use crate::modules::cv::application::ports::outgoing::{CvRepository, CvRepositoryError, CvResult};

pub struct PatchCvService<R>
where
    R: CvRepository,
{
    cv_repository: R,
}

impl<R> PatchCvService<R>
where
    R: CvRepository,
{
    pub fn new(cv_repository: R) -> Self {
        Self { cv_repository }
    }
}

#[async_trait]
impl<R> PatchCvUseCase for PatchCvService<R>
where
    R: CvRepository + Send + Sync,
{
    async fn execute(&self, cv_id: i32, command: PatchCvCommand) -> Result<CvResult, PatchCvError> {
        let patched = self
            .cv_repository
            .patch_cv(cv_id, command.into_data())
            .await
            .map_err(|e| match e {
                CvRepositoryError::NotFound => PatchCvError::NotFound,
                CvRepositoryError::EmailAlreadyExists => PatchCvError::EmailAlreadyExists,
                CvRepositoryError::DatabaseError(msg) => PatchCvError::RepositoryError(msg),
            })?;

        info!(cv_id, "CV patched");
        Ok(patched)
    }
}
