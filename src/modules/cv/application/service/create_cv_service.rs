use async_trait::async_trait;
use tracing::info;

use crate::modules::cv::application::ports::incoming::use_cases::{
    CreateCvCommand, CreateCvError, CreateCvUseCase,
};
use crate::modules::cv::application::ports::outgoing::{CvRepository, CvRepositoryError, CvResult};

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct CreateCvService<R>
where
    R: CvRepository,
{
    cv_repository: R,
}

impl<R> CreateCvService<R>
where
    R: CvRepository,
{
    pub fn new(cv_repository: R) -> Self {
        Self { cv_repository }
    }
}

#[async_trait]
impl<R> CreateCvUseCase for CreateCvService<R>
where
    R: CvRepository + Send + Sync,
{
    async fn execute(&self, command: CreateCvCommand) -> Result<CvResult, CreateCvError> {
        let created = self
            .cv_repository
            .create_cv(command.into_data())
            .await
            .map_err(|e| match e {
                CvRepositoryError::EmailAlreadyExists => CreateCvError::EmailAlreadyExists,
                CvRepositoryError::DatabaseError(msg) => CreateCvError::RepositoryError(msg),
                CvRepositoryError::NotFound => CreateCvError::RepositoryError(
                    "unexpected not found while creating CV".to_string(),
                ),
            })?;

        info!(cv_id = created.id, "CV created");
        Ok(created)
    }
}
