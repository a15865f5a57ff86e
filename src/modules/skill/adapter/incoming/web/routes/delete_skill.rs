use actix_web::{delete, web, Responder};
use tracing::error;

use crate::modules::skill::application::ports::incoming::use_cases::DeleteSkillError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[delete("/api/skills/{id}/")]
pub async fn delete_skill_handler(
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.skill.delete.execute(path.into_inner()).await {
        Ok(()) => ApiResponse::no_content(),
        Err(DeleteSkillError::NotFound) => {
            ApiResponse::not_found("SKILL_NOT_FOUND", "Skill not found")
        }
        Err(DeleteSkillError::RepositoryError(e)) => {
            error!("Repository error deleting skill: {}", e);
            ApiResponse::internal_error()
        }
    }
}
