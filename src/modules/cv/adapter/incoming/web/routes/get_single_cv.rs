use actix_web::{get, web, Responder};
use tracing::error;

use crate::modules::cv::application::ports::incoming::use_cases::GetSingleCvError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/cvs/{id}/")]
pub async fn get_single_cv_handler(
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    let cv_id = path.into_inner();

    match data.cv.get_single.execute(cv_id).await {
        Ok(cv) => ApiResponse::success(cv),
        Err(GetSingleCvError::NotFound) => ApiResponse::not_found("CV_NOT_FOUND", "CV not found"),
        Err(GetSingleCvError::QueryFailed(e)) => {
            error!("Failed to fetch CV {}: {}", cv_id, e);
            ApiResponse::internal_error()
        }
    }
}
