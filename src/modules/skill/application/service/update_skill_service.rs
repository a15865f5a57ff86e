use async_trait::async_trait;
use tracing::info;

use crate::modules::skill::application::ports::incoming::use_cases::{
    CreateSkillCommand, PatchSkillCommand, PatchSkillUseCase, UpdateSkillError, UpdateSkillUseCase,
};
use crate::modules::skill::application::ports::outgoing::{
    SkillRepository, SkillRepositoryError, SkillResult,
};

fn map_repo_err(e: SkillRepositoryError) -> UpdateSkillError {
    match e {
        SkillRepositoryError::NotFound => UpdateSkillError::NotFound,
        SkillRepositoryError::AlreadyExists => UpdateSkillError::AlreadyExists,
        SkillRepositoryError::CvNotFound => UpdateSkillError::CvNotFound,
        SkillRepositoryError::DatabaseError(msg) => UpdateSkillError::RepositoryError(msg),
    }
}

pub struct UpdateSkillService<R>
where
    R: SkillRepository,
{
    skill_repository: R,
}

impl<R> UpdateSkillService<R>
where
    R: SkillRepository,
{
    pub fn new(skill_repository: R) -> Self {
        Self { skill_repository }
    }
}

#[async_trait]
impl<R> UpdateSkillUseCase for UpdateSkillService<R>
where
    R: SkillRepository + Send + Sync,
{
    async fn execute(
        &self,
        skill_id: i32,
        command: CreateSkillCommand,
    ) -> Result<SkillResult, UpdateSkillError> {
        let updated = self
            .skill_repository
            .update_skill(skill_id, command.into_data())
            .await
            .map_err(map_repo_err)?;

        info!(skill_id, "Skill updated");
        Ok(updated)
    }
}

pub struct PatchSkillService<R>
where
    R: SkillRepository,
{
    skill_repository: R,
}

impl<R> PatchSkillService<R>
where
    R: SkillRepository,
{
    pub fn new(skill_repository: R) -> Self {
        Self { skill_repository }
    }
}

#[async_trait]
impl<R> PatchSkillUseCase for PatchSkillService<R>
where
    R: SkillRepository + Send + Sync,
{
    async fn execute(
        &self,
        skill_id: i32,
        command: PatchSkillCommand,
    ) -> Result<SkillResult, UpdateSkillError> {
        let updated = self
            .skill_repository
            .patch_skill(skill_id, command.into_data())
            .await
            .map_err(map_repo_err)?;

        info!(skill_id, "Skill patched");
        Ok(updated)
    }
}
