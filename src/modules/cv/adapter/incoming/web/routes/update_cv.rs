use actix_web::{patch, put, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::modules::cv::adapter::incoming::web::routes::CvRequest;
use crate::modules::cv::application::ports::incoming::use_cases::{
    PatchCvCommand, PatchCvError, UpdateCvError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct PatchCvRequest {
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub bio: Option<String>,
}

#[put("/api/cvs/{id}/")]
pub async fn update_cv_handler(
    path: web::Path<i32>,
    req: web::Json<CvRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let cv_id = path.into_inner();
    let command = match req.to_command() {
        Ok(command) => command,
        Err(e) => return ApiResponse::invalid_field(e.field, &e.message),
    };

    match data.cv.update.execute(cv_id, command).await {
        Ok(updated) => ApiResponse::success(updated),
        Err(UpdateCvError::NotFound) => ApiResponse::not_found("CV_NOT_FOUND", "CV not found"),
        Err(UpdateCvError::EmailAlreadyExists) => {
            ApiResponse::invalid_field("email", "A CV with this email already exists.")
        }
        Err(UpdateCvError::RepositoryError(e)) => {
            error!("Repository error updating CV {}: {}", cv_id, e);
            ApiResponse::internal_error()
        }
    }
}

#[patch("/api/cvs/{id}/")]
pub async fn patch_cv_handler(
    path: web::Path<i32>,
    req: web::Json<PatchCvRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let cv_id = path.into_inner();
    let req = req.into_inner();

    let command = match PatchCvCommand::new(
        req.firstname.as_deref(),
        req.lastname.as_deref(),
        req.email.as_deref(),
        req.phone.as_deref(),
        req.bio.as_deref(),
    ) {
        Ok(command) => command,
        Err(e) => return ApiResponse::invalid_field(e.field, &e.message),
    };

    match data.cv.patch.execute(cv_id, command).await {
        Ok(updated) => ApiResponse::success(updated),
        Err(PatchCvError::NotFound) => ApiResponse::not_found("CV_NOT_FOUND", "CV not found"),
        Err(PatchCvError::EmailAlreadyExists) => {
            ApiResponse::invalid_field("email", "A CV with this email already exists.")
        }
        Err(PatchCvError::RepositoryError(e)) => {
            error!("Repository error patching CV {}: {}", cv_id, e);
            ApiResponse::internal_error()
        }
    }
}
