use async_trait::async_trait;

use crate::modules::skill::application::ports::outgoing::{CreateSkillData, SkillResult};
use crate::modules::skill::domain::{validate_skill_name, Proficiency};
use crate::shared::validation::FieldError;

//
// ──────────────────────────────────────────────────────────
// Create Skill Command
// ──────────────────────────────────────────────────────────
//

/// Validated skill fields. Also used for full updates (PUT).
#[derive(Debug, Clone, PartialEq)]
pub struct CreateSkillCommand {
    data: CreateSkillData,
}

impl CreateSkillCommand {
    pub fn new(
        cv_id: i32,
        name: &str,
        proficiency: Option<Proficiency>,
    ) -> Result<Self, FieldError> {
        Ok(Self {
            data: CreateSkillData {
                cv_id,
                name: validate_skill_name(name)?,
                proficiency: proficiency.unwrap_or_default(),
            },
        })
    }

    pub fn cv_id(&self) -> i32 {
        self.data.cv_id
    }

    pub fn into_data(self) -> CreateSkillData {
        self.data
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateSkillError {
    #[error("A skill with this name already exists for this CV.")]
    AlreadyExists,

    #[error("CV not found")]
    CvNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateSkillUseCase: Send + Sync {
    async fn execute(&self, command: CreateSkillCommand) -> Result<SkillResult, CreateSkillError>;
}
