// src/shared/api/action.rs
use actix_web::{http::StatusCode, web, HttpResponse};
use serde::de::DeserializeOwned;
use serde_json::json;

/// Error body of the job action endpoints: `{success: false, error}`.
pub fn action_error(status: StatusCode, message: &str) -> HttpResponse {
    HttpResponse::build(status).json(json!({
        "success": false,
        "error": message,
    }))
}

pub fn method_not_allowed() -> HttpResponse {
    action_error(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
}

/// Parse an action body by hand so malformed JSON keeps the action error shape.
pub fn parse_action_body<T: DeserializeOwned>(body: &web::Bytes) -> Result<T, HttpResponse> {
    serde_json::from_slice(body)
        .map_err(|_| action_error(StatusCode::BAD_REQUEST, "Invalid JSON data"))
}
