use actix_web::{
    body::MessageBody,
    dev::{ServiceRequest, ServiceResponse},
    http::header,
    middleware::Next,
    web, Error,
};
use std::sync::Arc;
use std::time::Instant;

use crate::modules::request_log::application::ports::outgoing::NewRequestLog;
use crate::modules::request_log::domain::{client_ip, should_log, truncate_user_agent};
use crate::AppState;

/// Audits every non-asset request once its response status is known.
/// Wire with `actix_web::middleware::from_fn(request_logging)`.
pub async fn request_logging(
    req: ServiceRequest,
    next: Next<impl MessageBody>,
) -> Result<ServiceResponse<impl MessageBody>, Error> {
    let recorder = req
        .app_data::<web::Data<AppState>>()
        .map(|state| Arc::clone(&state.request_log.record));

    let recorder = match recorder {
        Some(recorder) if should_log(req.path()) => recorder,
        _ => return next.call(req).await,
    };

    let headers = req.headers();
    let remote_ip = client_ip(
        |name| headers.get(name).and_then(|v| v.to_str().ok()),
        req.peer_addr().map(|addr| addr.ip()),
    );
    let user_agent = headers
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .map(truncate_user_agent)
        .unwrap_or_default();
    let method = req.method().to_string();
    let path = req.path().to_string();
    let query_string = req.query_string().to_string();

    let started = Instant::now();
    let result = next.call(req).await;
    let response_time_ms = started.elapsed().as_secs_f64() * 1000.0;

    let response_status = match &result {
        Ok(res) => res.status().as_u16(),
        Err(e) => e.as_response_error().status_code().as_u16(),
    };

    recorder.record(NewRequestLog {
        method,
        path,
        query_string,
        remote_ip,
        user_agent,
        response_status,
        response_time_ms,
    });

    result
}
