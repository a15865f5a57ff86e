use async_trait::async_trait;
use chrono::NaiveDate;

use super::create_project::validate_description;
use crate::modules::project::application::ports::incoming::use_cases::CreateProjectCommand;
use crate::modules::project::application::ports::outgoing::{PatchProjectData, ProjectResult};
use crate::modules::project::domain::{validate_technologies, validate_title, validate_url};
use crate::shared::patch_field::PatchField;
use crate::shared::validation::FieldError;

//
// ──────────────────────────────────────────────────────────
// Patch Project Command
// ──────────────────────────────────────────────────────────
//

/// Field-level validation only; the date range is checked by the service
/// against the stored values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PatchProjectCommand {
    data: PatchProjectData,
}

impl PatchProjectCommand {
    pub fn new(
        cv_id: Option<i32>,
        title: Option<&str>,
        description: Option<&str>,
        technologies: Option<&str>,
        url: PatchField<String>,
        start_date: Option<NaiveDate>,
        end_date: PatchField<NaiveDate>,
    ) -> Result<Self, FieldError> {
        let url = match url {
            PatchField::Value(raw) => validate_url(Some(raw.as_str()))?.into(),
            other => other,
        };

        Ok(Self {
            data: PatchProjectData {
                cv_id,
                title: title.map(validate_title).transpose()?,
                description: description.map(validate_description).transpose()?,
                technologies: technologies.map(validate_technologies).transpose()?,
                url,
                start_date,
                end_date,
            },
        })
    }

    pub fn into_data(self) -> PatchProjectData {
        self.data
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error (shared by PUT and PATCH)
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateProjectError {
    #[error("Project not found")]
    NotFound,

    #[error("CV not found")]
    CvNotFound,

    #[error(transparent)]
    Invalid(#[from] FieldError),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateProjectUseCase: Send + Sync {
    async fn execute(
        &self,
        project_id: i32,
        command: CreateProjectCommand,
    ) -> Result<ProjectResult, UpdateProjectError>;
}

#[async_trait]
pub trait PatchProjectUseCase: Send + Sync {
    async fn execute(
        &self,
        project_id: i32,
        command: PatchProjectCommand,
    ) -> Result<ProjectResult, UpdateProjectError>;
}
