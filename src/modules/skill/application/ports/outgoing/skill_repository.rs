use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::modules::skill::domain::Proficiency;

#[derive(Debug, Clone, PartialEq)]
pub struct CreateSkillData {
    pub cv_id: i32,
    pub name: String,
    pub proficiency: Proficiency,
}

pub type UpdateSkillData = CreateSkillData;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PatchSkillData {
    pub cv_id: Option<i32>,
    pub name: Option<String>,
    pub proficiency: Option<Proficiency>,
}

impl PatchSkillData {
    pub fn is_empty(&self) -> bool {
        self.cv_id.is_none() && self.name.is_none() && self.proficiency.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillResult {
    pub id: i32,
    #[serde(rename = "cv")]
    pub cv_id: i32,
    pub name: String,
    pub proficiency: Proficiency,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SkillRepositoryError {
    #[error("Skill not found")]
    NotFound,

    #[error("A skill with this name already exists for this CV.")]
    AlreadyExists,

    #[error("CV not found")]
    CvNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait SkillRepository: Send + Sync {
    async fn create_skill(&self, data: CreateSkillData) -> Result<SkillResult, SkillRepositoryError>;

    async fn update_skill(
        &self,
        skill_id: i32,
        data: UpdateSkillData,
    ) -> Result<SkillResult, SkillRepositoryError>;

    async fn patch_skill(
        &self,
        skill_id: i32,
        data: PatchSkillData,
    ) -> Result<SkillResult, SkillRepositoryError>;

    async fn delete_skill(&self, skill_id: i32) -> Result<(), SkillRepositoryError>;
}
