use async_trait::async_trait;
use tracing::info;

use crate::modules::project::application::ports::incoming::use_cases::{
    CreateProjectCommand, PatchProjectCommand, PatchProjectUseCase, UpdateProjectError,
    UpdateProjectUseCase,
};
use crate::modules::project::application::ports::outgoing::{
    ProjectQuery, ProjectQueryError, ProjectRepository, ProjectRepositoryError, ProjectResult,
};
use crate::modules::project::domain::validate_date_range;

fn map_repo_err(e: ProjectRepositoryError) -> UpdateProjectError {
    match e {
        ProjectRepositoryError::NotFound => UpdateProjectError::NotFound,
        ProjectRepositoryError::CvNotFound => UpdateProjectError::CvNotFound,
        ProjectRepositoryError::DatabaseError(msg) => UpdateProjectError::RepositoryError(msg),
    }
}

pub struct UpdateProjectService<R>
where
    R: ProjectRepository,
{
    project_repository: R,
}

impl<R> UpdateProjectService<R>
where
    R: ProjectRepository,
{
    pub fn new(project_repository: R) -> Self {
        Self { project_repository }
    }
}

#[async_trait]
impl<R> UpdateProjectUseCase for UpdateProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(
        &self,
        project_id: i32,
        command: CreateProjectCommand,
    ) -> Result<ProjectResult, UpdateProjectError> {
        let updated = self
            .project_repository
            .update_project(project_id, command.into_data())
            .await
            .map_err(map_repo_err)?;

        info!(project_id, "Project updated");
        Ok(updated)
    }
}

//
// ──────────────────────────────────────────────────────────
// PATCH: the date range is checked against the merged values
// ──────────────────────────────────────────────────────────
//

pub struct PatchProjectService<R, Q>
where
    R: ProjectRepository,
    Q: ProjectQuery,
{
    project_repository: R,
    project_query: Q,
}

impl<R, Q> PatchProjectService<R, Q>
where
    R: ProjectRepository,
    Q: ProjectQuery,
{
    pub fn new(project_repository: R, project_query: Q) -> Self {
        Self {
            project_repository,
            project_query,
        }
    }
}

#[async_trait]
impl<R, Q> PatchProjectUseCase for PatchProjectService<R, Q>
where
    R: ProjectRepository + Send + Sync,
    Q: ProjectQuery + Send + Sync,
{
    async fn execute(
        &self,
        project_id: i32,
        command: PatchProjectCommand,
    ) -> Result<ProjectResult, UpdateProjectError> {
        let data = command.into_data();

        if data.touches_dates() {
            let current = self
                .project_query
                .get_by_id(project_id)
                .await
                .map_err(|e| match e {
                    ProjectQueryError::NotFound => UpdateProjectError::NotFound,
                    other => UpdateProjectError::RepositoryError(other.to_string()),
                })?;

            let start = data.start_date.unwrap_or(current.start_date);
            let end = data.end_date.clone().resolve_nullable(current.end_date);
            validate_date_range(start, end)?;
        }

        let updated = self
            .project_repository
            .patch_project(project_id, data)
            .await
            .map_err(map_repo_err)?;

        info!(project_id, "Project patched");
        Ok(updated)
    }
}
