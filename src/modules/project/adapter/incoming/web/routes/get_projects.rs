use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::modules::project::application::ports::incoming::use_cases::{
    GetCvProjectsError, GetSingleProjectError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct ProjectListQuery {
    pub cv: Option<i32>,
}

#[get("/api/projects/")]
pub async fn get_projects_handler(
    query: web::Query<ProjectListQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.project.get_list.execute(query.cv).await {
        Ok(projects) => ApiResponse::success(projects),
        Err(e) => {
            error!("Failed to list projects: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[get("/api/cvs/{cv_id}/projects/")]
pub async fn get_cv_projects_handler(
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.project.get_for_cv.execute(path.into_inner()).await {
        Ok(projects) => ApiResponse::success(projects),
        Err(GetCvProjectsError::CvNotFound) => {
            ApiResponse::not_found("CV_NOT_FOUND", "CV not found")
        }
        Err(GetCvProjectsError::QueryFailed(e)) => {
            error!("Failed to list CV projects: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[get("/api/projects/{id}/")]
pub async fn get_single_project_handler(
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.project.get_single.execute(path.into_inner()).await {
        Ok(project) => ApiResponse::success(project),
        Err(GetSingleProjectError::NotFound) => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }
        Err(GetSingleProjectError::QueryFailed(e)) => {
            error!("Failed to fetch project: {}", e);
            ApiResponse::internal_error()
        }
    }
}
