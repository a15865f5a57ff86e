use actix_web::{get, web, HttpResponse, Responder};
use askama::Template;
use serde::Deserialize;
use tracing::error;

use crate::modules::cv::application::ports::outgoing::CvSummaryView;
use crate::shared::html::render_html;
use crate::shared::pagination::{PageRequest, PageResult};
use crate::AppState;

const CVS_PER_PAGE: u64 = 10;

#[derive(Debug, Default, Deserialize)]
pub struct ListPageQuery {
    #[serde(default)]
    pub page: Option<String>,
}

impl ListPageQuery {
    /// Non-numeric or zero pages fall back to the first page.
    pub fn page(&self) -> PageRequest {
        let page = self
            .page
            .as_deref()
            .and_then(|p| p.trim().parse::<u64>().ok());
        PageRequest::clamped(page, None, CVS_PER_PAGE, CVS_PER_PAGE)
    }
}

#[derive(Template)]
#[template(path = "index.html")]
struct CvListTemplate {
    cvs: PageResult<CvSummaryView>,
}

#[get("/")]
pub async fn cv_list_page_handler(
    query: web::Query<ListPageQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let request = query.page();
    let mut cvs = match data.cv.browse.execute(request).await {
        Ok(cvs) => cvs,
        Err(e) => {
            error!("Failed to load CV list: {}", e);
            return HttpResponse::InternalServerError().body("Failed to load CVs");
        }
    };

    // Past the end: show the last page instead of an empty one.
    if cvs.items.is_empty() && cvs.page > 1 && cvs.total > 0 {
        let last = PageRequest {
            page: cvs.total_pages(),
            per_page: request.per_page,
        };
        match data.cv.browse.execute(last).await {
            Ok(page) => cvs = page,
            Err(e) => {
                error!("Failed to load CV list: {}", e);
                return HttpResponse::InternalServerError().body("Failed to load CVs");
            }
        }
    }

    render_html(&CvListTemplate { cvs })
}
