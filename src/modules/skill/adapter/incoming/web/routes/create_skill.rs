use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::modules::skill::application::ports::incoming::use_cases::{
    CreateSkillCommand, CreateSkillError,
};
use crate::modules::skill::domain::Proficiency;
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTOs
// ──────────────────────────────────────────────────────────
//

/// Body of POST /api/skills/ and PUT /api/skills/{id}/.
#[derive(Debug, Deserialize, Serialize)]
pub struct SkillRequest {
    pub cv: i32,
    pub name: String,
    #[serde(default)]
    pub proficiency: Option<Proficiency>,
}

/// Body of POST /api/cvs/{cv_id}/skills/add/; the CV comes from the path.
#[derive(Debug, Deserialize, Serialize)]
pub struct NestedSkillRequest {
    pub name: String,
    #[serde(default)]
    pub proficiency: Option<Proficiency>,
}

//
// ──────────────────────────────────────────────────────────
// Handlers
// ──────────────────────────────────────────────────────────
//

#[post("/api/skills/")]
pub async fn create_skill_handler(
    req: web::Json<SkillRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match CreateSkillCommand::new(req.cv, &req.name, req.proficiency) {
        Ok(command) => command,
        Err(e) => return ApiResponse::invalid_field(e.field, &e.message),
    };

    match data.skill.create.execute(command).await {
        Ok(created) => ApiResponse::created(created),
        Err(CreateSkillError::CvNotFound) => ApiResponse::invalid_field(
            "cv",
            &format!("Invalid pk \"{}\" - object does not exist.", req.cv),
        ),
        Err(e) => create_error_response(e),
    }
}

#[post("/api/cvs/{cv_id}/skills/add/")]
pub async fn add_cv_skill_handler(
    path: web::Path<i32>,
    req: web::Json<NestedSkillRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let cv_id = path.into_inner();
    let command = match CreateSkillCommand::new(cv_id, &req.name, req.proficiency) {
        Ok(command) => command,
        Err(e) => return ApiResponse::invalid_field(e.field, &e.message),
    };

    match data.skill.create.execute(command).await {
        Ok(created) => ApiResponse::created(created),
        Err(CreateSkillError::CvNotFound) => ApiResponse::not_found("CV_NOT_FOUND", "CV not found"),
        Err(e) => create_error_response(e),
    }
}

fn create_error_response(err: CreateSkillError) -> HttpResponse {
    match err {
        CreateSkillError::AlreadyExists => ApiResponse::invalid_field(
            "non_field_errors",
            "A skill with this name already exists for this CV.",
        ),
        CreateSkillError::CvNotFound => ApiResponse::not_found("CV_NOT_FOUND", "CV not found"),
        CreateSkillError::RepositoryError(e) => {
            error!("Repository error creating skill: {}", e);
            ApiResponse::internal_error()
        }
    }
}
