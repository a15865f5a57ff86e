use async_trait::async_trait;

use crate::modules::skill::application::ports::outgoing::SkillResult;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SkillQueryError {
    #[error("Skill not found")]
    NotFound,

    #[error("CV not found")]
    CvNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait SkillQuery: Send + Sync {
    async fn get_by_id(&self, skill_id: i32) -> Result<SkillResult, SkillQueryError>;

    /// Ordered by name, optionally restricted to one CV.
    async fn list(&self, cv_id: Option<i32>) -> Result<Vec<SkillResult>, SkillQueryError>;

    /// Skills of an existing CV; `CvNotFound` when the CV does not exist.
    async fn list_for_cv(&self, cv_id: i32) -> Result<Vec<SkillResult>, SkillQueryError>;
}
