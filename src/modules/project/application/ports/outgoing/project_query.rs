use async_trait::async_trait;

use crate::modules::project::application::ports::outgoing::ProjectResult;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProjectQueryError {
    #[error("Project not found")]
    NotFound,

    #[error("CV not found")]
    CvNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ProjectQuery: Send + Sync {
    async fn get_by_id(&self, project_id: i32) -> Result<ProjectResult, ProjectQueryError>;

    /// Newest start date first, optionally restricted to one CV.
    async fn list(&self, cv_id: Option<i32>) -> Result<Vec<ProjectResult>, ProjectQueryError>;

    async fn list_for_cv(&self, cv_id: i32) -> Result<Vec<ProjectResult>, ProjectQueryError>;
}
