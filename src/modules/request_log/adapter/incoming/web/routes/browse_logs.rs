use actix_web::{get, web, HttpResponse, Responder};
use askama::Template;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::modules::request_log::application::ports::incoming::use_cases::RequestLogPage;
use crate::modules::request_log::application::ports::outgoing::{
    RequestLogFilter, RequestLogStats, RequestLogView,
};
use crate::shared::api::ApiResponse;
use crate::shared::html::render_html;
use crate::shared::pagination::{PageRequest, PageResult};
use crate::AppState;

const DEFAULT_PER_PAGE: u64 = 50;
const MAX_PER_PAGE: u64 = 200;

/// Raw viewer query. Values come from an HTML form, so blanks and
/// unparseable numbers or dates are ignored rather than rejected.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LogsQuery {
    #[serde(default)]
    pub method: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub ip: String,
    #[serde(default)]
    pub date_from: String,
    #[serde(default)]
    pub date_to: String,
    pub page: Option<String>,
    pub per_page: Option<String>,
}

fn non_blank(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

fn parse_num(value: Option<&String>) -> Option<u64> {
    value.and_then(|v| v.trim().parse().ok())
}

impl LogsQuery {
    pub fn filter(&self) -> RequestLogFilter {
        RequestLogFilter {
            method: non_blank(&self.method),
            status: self.status.trim().parse().ok(),
            path: non_blank(&self.path),
            ip: non_blank(&self.ip),
            date_from: parse_date(&self.date_from),
            date_to: parse_date(&self.date_to),
        }
    }

    pub fn page(&self) -> PageRequest {
        PageRequest::clamped(
            parse_num(self.page.as_ref()),
            parse_num(self.per_page.as_ref()),
            DEFAULT_PER_PAGE,
            MAX_PER_PAGE,
        )
    }
}

#[derive(Template)]
#[template(path = "request_logs.html")]
struct RequestLogsTemplate<'a> {
    logs: &'a PageResult<RequestLogView>,
    stats: &'a RequestLogStats,
    query: &'a LogsQuery,
    methods: [&'static str; 7],
}

#[get("/logs/")]
pub async fn request_logs_page_handler(
    query: web::Query<LogsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let query = query.into_inner();

    match data.request_log.browse.execute(query.filter(), query.page()).await {
        Ok(RequestLogPage { logs, stats }) => render_html(&RequestLogsTemplate {
            logs: &logs,
            stats: &stats,
            query: &query,
            methods: ["GET", "POST", "PUT", "PATCH", "DELETE", "HEAD", "OPTIONS"],
        }),
        Err(e) => {
            error!("Failed to load request logs: {}", e);
            HttpResponse::InternalServerError().body("Failed to load request logs")
        }
    }
}

#[get("/logs/api/")]
pub async fn request_logs_api_handler(
    query: web::Query<LogsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.request_log.browse.execute(query.filter(), query.page()).await {
        Ok(page) => ApiResponse::success(serde_json::json!({
            "logs": page.logs.items,
            "page": page.logs.page,
            "per_page": page.logs.per_page,
            "total": page.logs.total,
            "total_pages": page.logs.total_pages(),
            "stats": page.stats,
        })),
        Err(e) => {
            error!("Failed to load request logs: {}", e);
            ApiResponse::internal_error()
        }
    }
}
