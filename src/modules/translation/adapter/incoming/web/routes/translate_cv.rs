use actix_web::{http::Method, http::StatusCode, route, web, HttpRequest, HttpResponse, Responder};
use serde::Deserialize;
use serde_json::json;
use tracing::error;

use crate::modules::translation::application::ports::incoming::use_cases::TranslateCvError;
use crate::modules::translation::domain::TargetLanguage;
use crate::shared::api::{action_error, method_not_allowed, parse_action_body};
use crate::AppState;

#[derive(Debug, Deserialize)]
struct TranslateCvBody {
    #[serde(default)]
    target_language: Option<String>,
}

#[route(
    "/cv/{id}/translate/",
    method = "GET",
    method = "POST",
    method = "PUT",
    method = "PATCH",
    method = "DELETE"
)]
pub async fn translate_cv_handler(
    req: HttpRequest,
    path: web::Path<i32>,
    body: web::Bytes,
    data: web::Data<AppState>,
) -> impl Responder {
    if req.method() != Method::POST {
        return method_not_allowed();
    }

    let body: TranslateCvBody = match parse_action_body(&body) {
        Ok(body) => body,
        Err(resp) => return resp,
    };

    let language = match TargetLanguage::parse_requested(body.target_language.as_deref()) {
        Ok(language) => language,
        Err(e) => return action_error(StatusCode::BAD_REQUEST, &e.to_string()),
    };

    let cv_id = path.into_inner();
    match data.translation.translate.execute(cv_id, language).await {
        Ok(queued) => HttpResponse::Ok().json(json!({
            "success": true,
            "message": format!(
                "CV translation to {} queued successfully. Check back shortly for the result.",
                queued.target_language
            ),
            "task_id": queued.task_id,
            "cv_name": queued.cv_name,
            "target_language": queued.target_language.display_name(),
        })),
        Err(TranslateCvError::NotConfigured) => action_error(
            StatusCode::SERVICE_UNAVAILABLE,
            &TranslateCvError::NotConfigured.to_string(),
        ),
        Err(e) => {
            error!(cv_id, "Failed to queue CV translation: {}", e);
            action_error(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::jobs::domain::JobId;
    use crate::modules::translation::application::ports::incoming::use_cases::{
        QueuedTranslation, TranslateCvUseCase,
    };
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use actix_web::{test, App};
    use async_trait::async_trait;
    use serde_json::Value;
    use std::sync::{Arc, Mutex};

    struct RecordingTranslate {
        result: Option<TranslateCvError>,
        last: Mutex<Option<(i32, TargetLanguage)>>,
    }

    impl RecordingTranslate {
        fn ok() -> Arc<Self> {
            Arc::new(Self {
                result: None,
                last: Mutex::new(None),
            })
        }

        fn failing(err: TranslateCvError) -> Arc<Self> {
            Arc::new(Self {
                result: Some(err),
                last: Mutex::new(None),
            })
        }
    }

    #[async_trait]
    impl TranslateCvUseCase for RecordingTranslate {
        async fn execute(
            &self,
            cv_id: i32,
            language: TargetLanguage,
        ) -> Result<QueuedTranslation, TranslateCvError> {
            *self.last.lock().unwrap() = Some((cv_id, language));
            match &self.result {
                Some(err) => Err(err.clone()),
                None => Ok(QueuedTranslation {
                    task_id: JobId::from("test-task-id".to_string()),
                    cv_name: "Ada Lovelace".to_string(),
                    target_language: language,
                }),
            }
        }
    }

    async fn call(use_case: Arc<RecordingTranslate>, req: test::TestRequest) -> (StatusCode, Value) {
        let app_state = TestAppStateBuilder::default()
            .with_translate_cv(use_case)
            .build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(translate_cv_handler),
        )
        .await;

        let resp = test::call_service(&app, req.to_request()).await;
        let status = resp.status();
        (status, test::read_body_json(resp).await)
    }

    fn post(payload: &'static str) -> test::TestRequest {
        test::TestRequest::post()
            .uri("/cv/1/translate/")
            .set_payload(payload)
    }

    #[actix_web::test]
    async fn valid_language_is_queued() {
        let use_case = RecordingTranslate::ok();
        let (status, body) = call(use_case.clone(), post(r#"{"target_language": "cornish"}"#)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["task_id"], "test-task-id");
        assert_eq!(body["target_language"], "Cornish");
        assert_eq!(
            *use_case.last.lock().unwrap(),
            Some((1, TargetLanguage::Cornish))
        );
    }

    #[actix_web::test]
    async fn every_supported_language_is_accepted() {
        for language in TargetLanguage::ALL {
            let payload = json!({ "target_language": language.code() }).to_string();
            let (status, body) = call(
                RecordingTranslate::ok(),
                test::TestRequest::post()
                    .uri("/cv/1/translate/")
                    .set_payload(payload),
            )
            .await;

            assert_eq!(status, StatusCode::OK, "{}", language.code());
            assert_eq!(body["target_language"], language.display_name());
        }
    }

    #[actix_web::test]
    async fn invalid_requests_are_rejected() {
        let (status, body) = call(RecordingTranslate::ok(), post(r#"{"target_language": "invalid_language"}"#)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Unsupported language: invalid_language");

        let (status, body) = call(RecordingTranslate::ok(), post("{}")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Target language is required");

        let (status, body) = call(RecordingTranslate::ok(), post("not json")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid JSON data");

        let (status, body) = call(
            RecordingTranslate::ok(),
            test::TestRequest::get().uri("/cv/1/translate/"),
        )
        .await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "Method not allowed");
    }

    #[actix_web::test]
    async fn missing_api_key_is_service_unavailable() {
        let (status, body) = call(
            RecordingTranslate::failing(TranslateCvError::NotConfigured),
            post(r#"{"target_language": "cornish"}"#),
        )
        .await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["error"], "Translation service is not configured");
    }

    #[actix_web::test]
    async fn missing_cv_is_server_error() {
        let (status, body) = call(
            RecordingTranslate::failing(TranslateCvError::CvNotFound(9999)),
            post(r#"{"target_language": "cornish"}"#),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["success"], false);
    }
}
