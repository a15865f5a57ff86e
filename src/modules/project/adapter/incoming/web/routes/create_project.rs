use actix_web::{post, web, HttpResponse, Responder};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::modules::project::application::ports::incoming::use_cases::{
    CreateProjectCommand, CreateProjectError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize, Serialize)]
pub struct ProjectRequest {
    pub cv: i32,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub technologies: String,
    #[serde(default)]
    pub url: Option<String>,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

impl ProjectRequest {
    pub fn to_command(&self) -> Result<CreateProjectCommand, HttpResponse> {
        CreateProjectCommand::new(
            self.cv,
            &self.title,
            &self.description,
            &self.technologies,
            self.url.as_deref(),
            self.start_date,
            self.end_date,
        )
        .map_err(|e| ApiResponse::invalid_field(e.field, &e.message))
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct NestedProjectRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub technologies: String,
    #[serde(default)]
    pub url: Option<String>,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

//
// ──────────────────────────────────────────────────────────
// Handlers
// ──────────────────────────────────────────────────────────
//

#[post("/api/projects/")]
pub async fn create_project_handler(
    req: web::Json<ProjectRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match req.to_command() {
        Ok(command) => command,
        Err(resp) => return resp,
    };

    match data.project.create.execute(command).await {
        Ok(created) => ApiResponse::created(created),
        Err(CreateProjectError::CvNotFound) => ApiResponse::invalid_field(
            "cv",
            &format!("Invalid pk \"{}\" - object does not exist.", req.cv),
        ),
        Err(CreateProjectError::RepositoryError(e)) => {
            error!("Repository error creating project: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[post("/api/cvs/{cv_id}/projects/add/")]
pub async fn add_cv_project_handler(
    path: web::Path<i32>,
    req: web::Json<NestedProjectRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match CreateProjectCommand::new(
        path.into_inner(),
        &req.title,
        &req.description,
        &req.technologies,
        req.url.as_deref(),
        req.start_date,
        req.end_date,
    ) {
        Ok(command) => command,
        Err(e) => return ApiResponse::invalid_field(e.field, &e.message),
    };

    match data.project.create.execute(command).await {
        Ok(created) => ApiResponse::created(created),
        Err(CreateProjectError::CvNotFound) => {
            ApiResponse::not_found("CV_NOT_FOUND", "CV not found")
        }
        Err(CreateProjectError::RepositoryError(e)) => {
            error!("Repository error adding project: {}", e);
            ApiResponse::internal_error()
        }
    }
}
