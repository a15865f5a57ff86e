use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

//
// ──────────────────────────────────────────────────────────
// Command data
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq)]
pub struct CreateCvData {
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub phone: String,
    pub bio: String,
}

/// PUT replaces every writable column.
pub type UpdateCvData = CreateCvData;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PatchCvData {
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub bio: Option<String>,
}

impl PatchCvData {
    pub fn is_empty(&self) -> bool {
        self.firstname.is_none()
            && self.lastname.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.bio.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CvResult {
    pub id: i32,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub phone: String,
    pub bio: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CvRepositoryError {
    #[error("CV not found")]
    NotFound,

    #[error("A CV with this email already exists.")]
    EmailAlreadyExists,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CvRepository: Send + Sync {
    async fn create_cv(&self, data: CreateCvData) -> Result<CvResult, CvRepositoryError>;

    async fn update_cv(&self, cv_id: i32, data: UpdateCvData) -> Result<CvResult, CvRepositoryError>;

    async fn patch_cv(&self, cv_id: i32, data: PatchCvData) -> Result<CvResult, CvRepositoryError>;

    /// Children are removed by the database cascade.
    async fn delete_cv(&self, cv_id: i32) -> Result<(), CvRepositoryError>;
}
