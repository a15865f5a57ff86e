use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::shared::patch_field::PatchField;

#[derive(Debug, Clone, PartialEq)]
pub struct CreateProjectData {
    pub cv_id: i32,
    pub title: String,
    pub description: String,
    pub technologies: String,
    pub url: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
}

pub type UpdateProjectData = CreateProjectData;

/// Partial update. `url` and `end_date` are nullable columns, so they carry
/// the Unset/Null/Value distinction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PatchProjectData {
    pub cv_id: Option<i32>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub technologies: Option<String>,
    pub url: PatchField<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: PatchField<NaiveDate>,
}

impl PatchProjectData {
    pub fn is_empty(&self) -> bool {
        self.cv_id.is_none()
            && self.title.is_none()
            && self.description.is_none()
            && self.technologies.is_none()
            && self.url.is_unset()
            && self.start_date.is_none()
            && self.end_date.is_unset()
    }

    pub fn touches_dates(&self) -> bool {
        self.start_date.is_some() || !self.end_date.is_unset()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectResult {
    pub id: i32,
    #[serde(rename = "cv")]
    pub cv_id: i32,
    pub title: String,
    pub description: String,
    pub technologies: String,
    pub technologies_list: Vec<String>,
    pub url: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub is_ongoing: bool,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProjectRepositoryError {
    #[error("Project not found")]
    NotFound,

    #[error("CV not found")]
    CvNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn create_project(
        &self,
        data: CreateProjectData,
    ) -> Result<ProjectResult, ProjectRepositoryError>;

    async fn update_project(
        &self,
        project_id: i32,
        data: UpdateProjectData,
    ) -> Result<ProjectResult, ProjectRepositoryError>;

    async fn patch_project(
        &self,
        project_id: i32,
        data: PatchProjectData,
    ) -> Result<ProjectResult, ProjectRepositoryError>;

    async fn delete_project(&self, project_id: i32) -> Result<(), ProjectRepositoryError>;
}
