use actix_web::{get, http::StatusCode, web, HttpResponse, Responder};
use serde_json::{json, Value};
use tracing::error;

use crate::modules::jobs::domain::{JobId, JobRecord, JobState};
use crate::shared::api::action_error;
use crate::AppState;

/// Polling payload for the translation job.
pub fn translation_status_body(record: &JobRecord) -> Value {
    match record.state {
        JobState::Pending => json!({
            "state": record.state,
            "status": "Translation is being queued...",
        }),
        JobState::Started => json!({
            "state": record.state,
            "status": "Translation in progress...",
        }),
        JobState::Retry => json!({
            "state": record.state,
            "status": "Retrying translation...",
        }),
        JobState::Success => {
            let result = record.result.clone().unwrap_or(Value::Null);
            json!({
                "state": record.state,
                "status": "Translation completed successfully!",
                "translated_data": result["translated_data"],
                "cv_name": result["cv_name"],
                "target_language": result["target_language"],
            })
        }
        JobState::Failure => {
            let error = record.error.clone().unwrap_or_default();
            json!({
                "state": record.state,
                "status": format!("Translation failed: {error}"),
                "error": error,
            })
        }
    }
}

#[get("/translation-status/{job_id}/")]
pub async fn translation_status_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let job_id = JobId::from(path.into_inner());
    match data.jobs.status.execute(job_id).await {
        Ok(record) => HttpResponse::Ok().json(translation_status_body(&record)),
        Err(e) => {
            error!("Failed to read translation status: {}", e);
            action_error(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string())
        }
    }
}
