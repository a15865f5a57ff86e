use actix_web::{get, http::StatusCode, web, HttpResponse, Responder};
use serde_json::{json, Value};
use tracing::error;

use crate::modules::jobs::domain::{JobId, JobRecord, JobState};
use crate::shared::api::action_error;
use crate::AppState;

/// Polling payload for the email job.
pub fn task_status_body(record: &JobRecord) -> Value {
    let status = match record.state {
        JobState::Pending => "Task is waiting to be processed...",
        JobState::Started => "Task is being processed...",
        JobState::Retry => "Task is being retried...",
        JobState::Success => "Email sent successfully!",
        JobState::Failure => "Task failed",
    };

    let mut body = json!({
        "state": record.state,
        "status": status,
    });
    match record.state {
        JobState::Success => body["result"] = record.result.clone().unwrap_or(Value::Null),
        JobState::Failure => {
            body["error"] = json!(record.error.clone().unwrap_or_default());
        }
        _ => {}
    }
    body
}

#[get("/task-status/{job_id}/")]
pub async fn task_status_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let job_id = JobId::from(path.into_inner());
    match data.jobs.status.execute(job_id).await {
        Ok(record) => HttpResponse::Ok().json(task_status_body(&record)),
        Err(e) => {
            error!("Failed to read task status: {}", e);
            action_error(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string())
        }
    }
}
