use async_trait::async_trait;
use chrono::NaiveDate;

use crate::modules::project::application::ports::outgoing::{CreateProjectData, ProjectResult};
use crate::modules::project::domain::{
    validate_date_range, validate_technologies, validate_title, validate_url,
};
use crate::shared::validation::{optional_text, FieldError};

/// Upper bound for the free-text description column.
const DESCRIPTION_MAX_CHARS: usize = 10_000;

//
// ──────────────────────────────────────────────────────────
// Create Project Command
// ──────────────────────────────────────────────────────────
//

/// Validated project fields. Also used for full updates (PUT).
#[derive(Debug, Clone, PartialEq)]
pub struct CreateProjectCommand {
    data: CreateProjectData,
}

impl CreateProjectCommand {
    pub fn new(
        cv_id: i32,
        title: &str,
        description: &str,
        technologies: &str,
        url: Option<&str>,
        start_date: NaiveDate,
        end_date: Option<NaiveDate>,
    ) -> Result<Self, FieldError> {
        validate_date_range(start_date, end_date)?;

        Ok(Self {
            data: CreateProjectData {
                cv_id,
                title: validate_title(title)?,
                description: validate_description(description)?,
                technologies: validate_technologies(technologies)?,
                url: validate_url(url)?,
                start_date,
                end_date,
            },
        })
    }

    pub fn cv_id(&self) -> i32 {
        self.data.cv_id
    }

    pub fn into_data(self) -> CreateProjectData {
        self.data
    }
}

pub(crate) fn validate_description(raw: &str) -> Result<String, FieldError> {
    optional_text("description", raw, DESCRIPTION_MAX_CHARS)
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateProjectError {
    #[error("CV not found")]
    CvNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateProjectUseCase: Send + Sync {
    async fn execute(
        &self,
        command: CreateProjectCommand,
    ) -> Result<ProjectResult, CreateProjectError>;
}
