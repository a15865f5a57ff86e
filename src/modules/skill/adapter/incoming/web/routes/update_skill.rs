use actix_web::{patch, put, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::modules::skill::adapter::incoming::web::routes::SkillRequest;
use crate::modules::skill::application::ports::incoming::use_cases::{
    CreateSkillCommand, PatchSkillCommand, UpdateSkillError,
};
use crate::modules::skill::domain::Proficiency;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct PatchSkillRequest {
    pub cv: Option<i32>,
    pub name: Option<String>,
    pub proficiency: Option<Proficiency>,
}

#[put("/api/skills/{id}/")]
pub async fn update_skill_handler(
    path: web::Path<i32>,
    req: web::Json<SkillRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match CreateSkillCommand::new(req.cv, &req.name, req.proficiency) {
        Ok(command) => command,
        Err(e) => return ApiResponse::invalid_field(e.field, &e.message),
    };

    let result = data.skill.update.execute(path.into_inner(), command).await;
    update_response(result, Some(req.cv))
}

#[patch("/api/skills/{id}/")]
pub async fn patch_skill_handler(
    path: web::Path<i32>,
    req: web::Json<PatchSkillRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match PatchSkillCommand::new(req.cv, req.name.as_deref(), req.proficiency) {
        Ok(command) => command,
        Err(e) => return ApiResponse::invalid_field(e.field, &e.message),
    };

    let result = data.skill.patch.execute(path.into_inner(), command).await;
    update_response(result, req.cv)
}

fn update_response<T: Serialize>(
    result: Result<T, UpdateSkillError>,
    cv: Option<i32>,
) -> HttpResponse {
    match result {
        Ok(skill) => ApiResponse::success(skill),
        Err(UpdateSkillError::NotFound) => {
            ApiResponse::not_found("SKILL_NOT_FOUND", "Skill not found")
        }
        Err(UpdateSkillError::AlreadyExists) => ApiResponse::invalid_field(
            "non_field_errors",
            "A skill with this name already exists for this CV.",
        ),
        Err(UpdateSkillError::CvNotFound) => ApiResponse::invalid_field(
            "cv",
            &format!(
                "Invalid pk \"{}\" - object does not exist.",
                cv.map(|c| c.to_string()).unwrap_or_default()
            ),
        ),
        Err(UpdateSkillError::RepositoryError(e)) => {
            error!("Repository error updating skill: {}", e);
            ApiResponse::internal_error()
        }
    }
}
