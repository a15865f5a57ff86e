use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::modules::contact::domain::ContactType;
use crate::modules::skill::domain::Proficiency;
use crate::shared::pagination::{PageRequest, PageResult};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CvListFilter {
    /// Case-insensitive substring of the email.
    pub email: Option<String>,
    /// Case-insensitive substring of either name.
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillItem {
    pub id: i32,
    pub name: String,
    pub proficiency: Proficiency,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectItem {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub technologies: String,
    pub technologies_list: Vec<String>,
    pub url: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub is_ongoing: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactItem {
    pub id: i32,
    pub contact_type: ContactType,
    pub value: String,
    pub url: String,
}

/// A CV with its skills, projects and contacts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CvDetailView {
    pub id: i32,
    pub firstname: String,
    pub lastname: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub bio: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub skills: Vec<SkillItem>,
    pub projects: Vec<ProjectItem>,
    pub contacts: Vec<ContactItem>,
}

/// Row of the CV list page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CvSummaryView {
    pub id: i32,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub bio: String,
    pub created_at: DateTime<Utc>,
    pub skill_count: u64,
    pub project_count: u64,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CvQueryError {
    #[error("CV not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait CvQuery: Send + Sync {
    async fn get_detail(&self, cv_id: i32) -> Result<CvDetailView, CvQueryError>;

    /// Newest first.
    async fn list_details(&self, filter: CvListFilter) -> Result<Vec<CvDetailView>, CvQueryError>;

    async fn list_page(&self, page: PageRequest) -> Result<PageResult<CvSummaryView>, CvQueryError>;

    async fn count(&self) -> Result<u64, CvQueryError>;
}
