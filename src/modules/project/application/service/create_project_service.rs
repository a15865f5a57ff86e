use async_trait::async_trait;
use tracing::info;

use crate::modules::project::application::ports::incoming::use_cases::{
    CreateProjectCommand, CreateProjectError, CreateProjectUseCase,
};
use crate::modules::project::application::ports::outgoing::{
    ProjectRepository, ProjectRepositoryError, ProjectResult,
};

pub struct CreateProjectService<R>
where
    R: ProjectRepository,
{
    project_repository: R,
}

impl<R> CreateProjectService<R>
where
    R: ProjectRepository,
{
    pub fn new(project_repository: R) -> Self {
        Self { project_repository }
    }
}

#[async_trait]
impl<R> CreateProjectUseCase for CreateProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: CreateProjectCommand,
    ) -> Result<ProjectResult, CreateProjectError> {
        let created = self
            .project_repository
            .create_project(command.into_data())
            .await
            .map_err(|e| match e {
                ProjectRepositoryError::CvNotFound => CreateProjectError::CvNotFound,
                other => CreateProjectError::RepositoryError(other.to_string()),
            })?;

        info!(project_id = created.id, cv_id = created.cv_id, "Project created");
        Ok(created)
    }
}
