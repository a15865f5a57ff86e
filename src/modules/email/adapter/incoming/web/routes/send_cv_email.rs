use actix_web::{http::Method, http::StatusCode, route, web, HttpRequest, HttpResponse, Responder};
use serde::Deserialize;
use serde_json::json;
use tracing::error;

use crate::modules::email::application::ports::incoming::use_cases::{
    SendCvEmailCommand, SendCvEmailError,
};
use crate::shared::api::{action_error, method_not_allowed, parse_action_body};
use crate::AppState;

#[derive(Debug, Deserialize)]
struct SendCvEmailBody {
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    sender_name: Option<String>,
}

#[route(
    "/cv/{id}/email/",
    method = "GET",
    method = "POST",
    method = "PUT",
    method = "PATCH",
    method = "DELETE"
)]
pub async fn send_cv_email_handler(
    req: HttpRequest,
    path: web::Path<i32>,
    body: web::Bytes,
    data: web::Data<AppState>,
) -> impl Responder {
    if req.method() != Method::POST {
        return method_not_allowed();
    }

    let body: SendCvEmailBody = match parse_action_body(&body) {
        Ok(body) => body,
        Err(resp) => return resp,
    };

    let command = match SendCvEmailCommand::new(body.email.as_deref(), body.sender_name.as_deref())
    {
        Ok(command) => command,
        Err(e) => return action_error(StatusCode::BAD_REQUEST, &e.message),
    };

    let cv_id = path.into_inner();
    match data.email.send_cv.execute(cv_id, command).await {
        Ok(queued) => HttpResponse::Ok().json(json!({
            "success": true,
            "message": "CV email queued successfully. You will receive it shortly.",
            "task_id": queued.task_id,
            "cv_name": queued.cv_name,
            "recipient": queued.recipient,
        })),
        Err(e @ SendCvEmailError::CvNotFound(_)) => {
            action_error(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string())
        }
        Err(e) => {
            error!(cv_id, "Failed to queue CV email: {}", e);
            action_error(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::email::application::ports::incoming::use_cases::{
        QueuedEmail, SendCvEmailUseCase,
    };
    use crate::modules::jobs::domain::JobId;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use actix_web::{test, App};
    use async_trait::async_trait;
    use serde_json::Value;
    use std::sync::{Arc, Mutex};

    struct RecordingSendCvEmail {
        result: Result<QueuedEmail, SendCvEmailError>,
        last: Mutex<Option<(i32, SendCvEmailCommand)>>,
    }

    impl RecordingSendCvEmail {
        fn new(result: Result<QueuedEmail, SendCvEmailError>) -> Arc<Self> {
            Arc::new(Self {
                result,
                last: Mutex::new(None),
            })
        }
    }

    #[async_trait]
    impl SendCvEmailUseCase for RecordingSendCvEmail {
        async fn execute(
            &self,
            cv_id: i32,
            command: SendCvEmailCommand,
        ) -> Result<QueuedEmail, SendCvEmailError> {
            *self.last.lock().unwrap() = Some((cv_id, command));
            self.result.clone()
        }
    }

    fn queued() -> QueuedEmail {
        QueuedEmail {
            task_id: JobId::from("job-1".to_string()),
            cv_name: "Ada Lovelace".to_string(),
            recipient: "hr@example.com".to_string(),
        }
    }

    async fn call(
        use_case: Arc<RecordingSendCvEmail>,
        req: test::TestRequest,
    ) -> (StatusCode, Value) {
        let app_state = TestAppStateBuilder::default()
            .with_send_cv_email(use_case)
            .build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(send_cv_email_handler),
        )
        .await;

        let resp = test::call_service(&app, req.to_request()).await;
        let status = resp.status();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn queues_email_and_returns_task_id() {
        let use_case = RecordingSendCvEmail::new(Ok(queued()));
        let (status, body) = call(
            use_case.clone(),
            test::TestRequest::post()
                .uri("/cv/1/email/")
                .set_payload(r#"{"email": " hr@example.com ", "sender_name": "Grace"}"#),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(
            body["message"],
            "CV email queued successfully. You will receive it shortly."
        );
        assert_eq!(body["task_id"], "job-1");
        assert_eq!(body["cv_name"], "Ada Lovelace");

        let (cv_id, command) = use_case.last.lock().unwrap().clone().unwrap();
        assert_eq!(cv_id, 1);
        assert_eq!(command.recipient(), "hr@example.com");
        assert_eq!(command.sender_name(), Some("Grace"));
    }

    #[actix_web::test]
    async fn get_is_method_not_allowed() {
        let (status, body) = call(
            RecordingSendCvEmail::new(Ok(queued())),
            test::TestRequest::get().uri("/cv/1/email/"),
        )
        .await;

        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body["error"], "Method not allowed");
    }

    #[actix_web::test]
    async fn malformed_json_is_rejected() {
        let (status, body) = call(
            RecordingSendCvEmail::new(Ok(queued())),
            test::TestRequest::post()
                .uri("/cv/1/email/")
                .set_payload("{email:"),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid JSON data");
    }

    #[actix_web::test]
    async fn missing_and_invalid_emails_are_rejected() {
        let (status, body) = call(
            RecordingSendCvEmail::new(Ok(queued())),
            test::TestRequest::post().uri("/cv/1/email/").set_payload("{}"),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Email address is required");

        let (status, body) = call(
            RecordingSendCvEmail::new(Ok(queued())),
            test::TestRequest::post()
                .uri("/cv/1/email/")
                .set_payload(r#"{"email": "invalid-email"}"#),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Please enter a valid email address");
    }

    #[actix_web::test]
    async fn missing_cv_is_server_error() {
        let (status, body) = call(
            RecordingSendCvEmail::new(Err(SendCvEmailError::CvNotFound(9999))),
            test::TestRequest::post()
                .uri("/cv/9999/email/")
                .set_payload(r#"{"email": "hr@example.com"}"#),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "CV with ID 9999 not found");
    }
}
