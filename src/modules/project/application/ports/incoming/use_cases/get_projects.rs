use async_trait::async_trait;

use crate::modules::project::application::ports::outgoing::ProjectResult;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetProjectsError {
    #[error("Failed to fetch projects: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetProjectsUseCase: Send + Sync {
    async fn execute(&self, cv_id: Option<i32>) -> Result<Vec<ProjectResult>, GetProjectsError>;
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetCvProjectsError {
    #[error("CV not found")]
    CvNotFound,

    #[error("Failed to fetch projects: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetCvProjectsUseCase: Send + Sync {
    async fn execute(&self, cv_id: i32) -> Result<Vec<ProjectResult>, GetCvProjectsError>;
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetSingleProjectError {
    #[error("Project not found")]
    NotFound,

    #[error("Failed to fetch project: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetSingleProjectUseCase: Send + Sync {
    async fn execute(&self, project_id: i32) -> Result<ProjectResult, GetSingleProjectError>;
}
