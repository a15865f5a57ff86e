use async_trait::async_trait;

use crate::modules::skill::application::ports::incoming::use_cases::CreateSkillCommand;
use crate::modules::skill::application::ports::outgoing::{PatchSkillData, SkillResult};
use crate::modules::skill::domain::{validate_skill_name, Proficiency};
use crate::shared::validation::FieldError;

//
// ──────────────────────────────────────────────────────────
// Patch Skill Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PatchSkillCommand {
    data: PatchSkillData,
}

impl PatchSkillCommand {
    pub fn new(
        cv_id: Option<i32>,
        name: Option<&str>,
        proficiency: Option<Proficiency>,
    ) -> Result<Self, FieldError> {
        Ok(Self {
            data: PatchSkillData {
                cv_id,
                name: name.map(validate_skill_name).transpose()?,
                proficiency,
            },
        })
    }

    pub fn into_data(self) -> PatchSkillData {
        self.data
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error (shared by PUT and PATCH)
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateSkillError {
    #[error("Skill not found")]
    NotFound,

    #[error("A skill with this name already exists for this CV.")]
    AlreadyExists,

    #[error("CV not found")]
    CvNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateSkillUseCase: Send + Sync {
    async fn execute(
        &self,
        skill_id: i32,
        command: CreateSkillCommand,
    ) -> Result<SkillResult, UpdateSkillError>;
}

#[async_trait]
pub trait PatchSkillUseCase: Send + Sync {
    async fn execute(
        &self,
        skill_id: i32,
        command: PatchSkillCommand,
    ) -> Result<SkillResult, UpdateSkillError>;
}
