use async_trait::async_trait;

use crate::modules::project::application::ports::incoming::use_cases::{
    GetCvProjectsError, GetCvProjectsUseCase, GetProjectsError, GetProjectsUseCase,
    GetSingleProjectError, GetSingleProjectUseCase,
};
use crate::modules::project::application::ports::outgoing::{
    ProjectQuery, ProjectQueryError, ProjectResult,
};

pub struct GetProjectsService<Q>
where
    Q: ProjectQuery,
{
    query: Q,
}

impl<Q> GetProjectsService<Q>
where
    Q: ProjectQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetProjectsUseCase for GetProjectsService<Q>
where
    Q: ProjectQuery + Send + Sync,
{
    async fn execute(&self, cv_id: Option<i32>) -> Result<Vec<ProjectResult>, GetProjectsError> {
        self.query
            .list(cv_id)
            .await
            .map_err(|e| GetProjectsError::QueryFailed(e.to_string()))
    }
}

pub struct GetCvProjectsService<Q>
where
    Q: ProjectQuery,
{
    query: Q,
}

impl<Q> GetCvProjectsService<Q>
where
    Q: ProjectQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetCvProjectsUseCase for GetCvProjectsService<Q>
where
    Q: ProjectQuery + Send + Sync,
{
    async fn execute(&self, cv_id: i32) -> Result<Vec<ProjectResult>, GetCvProjectsError> {
        self.query.list_for_cv(cv_id).await.map_err(|e| match e {
            ProjectQueryError::CvNotFound => GetCvProjectsError::CvNotFound,
            other => GetCvProjectsError::QueryFailed(other.to_string()),
        })
    }
}

pub struct GetSingleProjectService<Q>
where
    Q: ProjectQuery,
{
    query: Q,
}

impl<Q> GetSingleProjectService<Q>
where
    Q: ProjectQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetSingleProjectUseCase for GetSingleProjectService<Q>
where
    Q: ProjectQuery + Send + Sync,
{
    async fn execute(&self, project_id: i32) -> Result<ProjectResult, GetSingleProjectError> {
        self.query.get_by_id(project_id).await.map_err(|e| match e {
            ProjectQueryError::NotFound => GetSingleProjectError::NotFound,
            other => GetSingleProjectError::QueryFailed(other.to_string()),
        })
    }
}
