use actix_web::{patch, put, web, HttpResponse, Responder};
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::error;

use crate::modules::project::adapter::incoming::web::routes::ProjectRequest;
use crate::modules::project::application::ports::incoming::use_cases::{
    PatchProjectCommand, UpdateProjectError,
};
use crate::modules::project::application::ports::outgoing::ProjectResult;
use crate::shared::api::ApiResponse;
use crate::shared::patch_field::PatchField;
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct PatchProjectRequest {
    pub cv: Option<i32>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub technologies: Option<String>,
    #[serde(default)]
    pub url: PatchField<String>,
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: PatchField<NaiveDate>,
}

#[put("/api/projects/{id}/")]
pub async fn update_project_handler(
    path: web::Path<i32>,
    req: web::Json<ProjectRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match req.to_command() {
        Ok(command) => command,
        Err(resp) => return resp,
    };

    let result = data.project.update.execute(path.into_inner(), command).await;
    update_response(result, Some(req.cv))
}

#[patch("/api/projects/{id}/")]
pub async fn patch_project_handler(
    path: web::Path<i32>,
    req: web::Json<PatchProjectRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();
    let cv = req.cv;

    let command = match PatchProjectCommand::new(
        req.cv,
        req.title.as_deref(),
        req.description.as_deref(),
        req.technologies.as_deref(),
        req.url,
        req.start_date,
        req.end_date,
    ) {
        Ok(command) => command,
        Err(e) => return ApiResponse::invalid_field(e.field, &e.message),
    };

    let result = data.project.patch.execute(path.into_inner(), command).await;
    update_response(result, cv)
}

fn update_response(
    result: Result<ProjectResult, UpdateProjectError>,
    cv: Option<i32>,
) -> HttpResponse {
    match result {
        Ok(project) => ApiResponse::success(project),
        Err(UpdateProjectError::NotFound) => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }
        Err(UpdateProjectError::CvNotFound) => ApiResponse::invalid_field(
            "cv",
            &format!(
                "Invalid pk \"{}\" - object does not exist.",
                cv.map(|c| c.to_string()).unwrap_or_default()
            ),
        ),
        Err(UpdateProjectError::Invalid(e)) => ApiResponse::invalid_field(e.field, &e.message),
        Err(UpdateProjectError::RepositoryError(e)) => {
            error!("Repository error updating project: {}", e);
            ApiResponse::internal_error()
        }
    }
}
