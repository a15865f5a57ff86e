use async_trait::async_trait;
use tracing::info;

use crate::modules::skill::application::ports::incoming::use_cases::{
    DeleteSkillError, DeleteSkillUseCase,
};
use crate::modules::skill::application::ports::outgoing::{SkillRepository, SkillRepositoryError};

pub struct DeleteSkillService<R>
where
    R: SkillRepository,
{
    skill_repository: R,
}

impl<R> DeleteSkillService<R>
where
    R: SkillRepository,
{
    pub fn new(skill_repository: R) -> Self {
        Self { skill_repository }
    }
}

#[async_trait]
impl<R> DeleteSkillUseCase for DeleteSkillService<R>
where
    R: SkillRepository + Send + Sync,
{
    async fn execute(&self, skill_id: i32) -> Result<(), DeleteSkillError> {
        self.skill_repository
            .delete_skill(skill_id)
            .await
            .map_err(|e| match e {
                SkillRepositoryError::NotFound => DeleteSkillError::NotFound,
                other => DeleteSkillError::RepositoryError(other.to_string()),
            })?;

        info!(skill_id, "Skill deleted");
        Ok(())
    }
}
