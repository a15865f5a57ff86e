use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::modules::cv::application::ports::outgoing::CvListFilter;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CvListQuery {
    pub email: Option<String>,
    pub name: Option<String>,
}

#[get("/api/cvs/")]
pub async fn get_cvs_handler(
    query: web::Query<CvListQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let query = query.into_inner();
    let filter = CvListFilter {
        email: query.email,
        name: query.name,
    };

    match data.cv.get_list.execute(filter).await {
        Ok(cvs) => ApiResponse::success(cvs),
        Err(e) => {
            error!("Failed to list CVs: {}", e);
            ApiResponse::internal_error()
        }
    }
}
