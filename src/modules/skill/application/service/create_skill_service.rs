use async_trait::async_trait;
use tracing::info;

use crate::modules::skill::application::ports::incoming::use_cases::{
    CreateSkillCommand, CreateSkillError, CreateSkillUseCase,
};
use crate::modules::skill::application::ports::outgoing::{
    SkillRepository, SkillRepositoryError, SkillResult,
};

pub struct CreateSkillService<R>
where
    R: SkillRepository,
{
    skill_repository: R,
}

impl<R> CreateSkillService<R>
where
    R: SkillRepository,
{
    pub fn new(skill_repository: R) -> Self {
        Self { skill_repository }
    }
}

#[async_trait]
impl<R> CreateSkillUseCase for CreateSkillService<R>
where
    R: SkillRepository + Send + Sync,
{
    async fn execute(&self, command: CreateSkillCommand) -> Result<SkillResult, CreateSkillError> {
        let created = self
            .skill_repository
            .create_skill(command.into_data())
            .await
            .map_err(|e| match e {
                SkillRepositoryError::AlreadyExists => CreateSkillError::AlreadyExists,
                SkillRepositoryError::CvNotFound => CreateSkillError::CvNotFound,
                SkillRepositoryError::DatabaseError(msg) => CreateSkillError::RepositoryError(msg),
                SkillRepositoryError::NotFound => CreateSkillError::RepositoryError(
                    "unexpected not found while creating skill".to_string(),
                ),
            })?;

        info!(skill_id = created.id, cv_id = created.cv_id, "Skill created");
        Ok(created)
    }
}
