use actix_web::{delete, web, Responder};
use tracing::error;

use crate::modules::project::application::ports::incoming::use_cases::DeleteProjectError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[delete("/api/projects/{id}/")]
pub async fn delete_project_handler(
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.project.delete.execute(path.into_inner()).await {
        Ok(()) => ApiResponse::no_content(),
        Err(DeleteProjectError::NotFound) => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }
        Err(DeleteProjectError::RepositoryError(e)) => {
            error!("Repository error deleting project: {}", e);
            ApiResponse::internal_error()
        }
    }
}
