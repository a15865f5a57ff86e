use async_trait::async_trait;

use crate::modules::skill::application::ports::outgoing::SkillResult;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetSkillsError {
    #[error("Failed to fetch skills: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetSkillsUseCase: Send + Sync {
    async fn execute(&self, cv_id: Option<i32>) -> Result<Vec<SkillResult>, GetSkillsError>;
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetCvSkillsError {
    #[error("CV not found")]
    CvNotFound,

    #[error("Failed to fetch skills: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetCvSkillsUseCase: Send + Sync {
    async fn execute(&self, cv_id: i32) -> Result<Vec<SkillResult>, GetCvSkillsError>;
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetSingleSkillError {
    #[error("Skill not found")]
    NotFound,

    #[error("Failed to fetch skill: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetSingleSkillUseCase: Send + Sync {
    async fn execute(&self, skill_id: i32) -> Result<SkillResult, GetSingleSkillError>;
}
