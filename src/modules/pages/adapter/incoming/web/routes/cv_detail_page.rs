use actix_web::{get, web, HttpResponse, Responder};
use askama::Template;
use tracing::error;

use crate::modules::cv::application::ports::incoming::use_cases::GetSingleCvError;
use crate::modules::cv::application::ports::outgoing::CvDetailView;
use crate::modules::translation::domain::TargetLanguage;
use crate::shared::html::{not_found_page, render_html};
use crate::AppState;

#[derive(Template)]
#[template(path = "cv_detail.html")]
struct CvDetailTemplate {
    cv: CvDetailView,
    languages: [TargetLanguage; 17],
}

#[get("/cv/{id}/")]
pub async fn cv_detail_page_handler(
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.cv.get_single.execute(path.into_inner()).await {
        Ok(cv) => render_html(&CvDetailTemplate {
            cv,
            languages: TargetLanguage::ALL,
        }),
        Err(GetSingleCvError::NotFound) => not_found_page("No CV matches the given query."),
        Err(e) => {
            error!("Failed to load CV: {}", e);
            HttpResponse::InternalServerError().body("Failed to load CV")
        }
    }
}
