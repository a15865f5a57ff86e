use actix_web::{delete, web, Responder};
use tracing::error;

use crate::modules::cv::application::ports::incoming::use_cases::DeleteCvError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[delete("/api/cvs/{id}/")]
pub async fn delete_cv_handler(path: web::Path<i32>, data: web::Data<AppState>) -> impl Responder {
    let cv_id = path.into_inner();

    match data.cv.delete.execute(cv_id).await {
        Ok(()) => ApiResponse::no_content(),
        Err(DeleteCvError::NotFound) => ApiResponse::not_found("CV_NOT_FOUND", "CV not found"),
        Err(DeleteCvError::RepositoryError(e)) => {
            error!("Repository error deleting CV {}: {}", cv_id, e);
            ApiResponse::internal_error()
        }
    }
}
