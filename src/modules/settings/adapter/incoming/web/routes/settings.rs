use actix_web::{get, web, HttpResponse, Responder};
use askama::Template;
use serde_json::{json, Value};
use tracing::error;

use crate::modules::settings::application::ports::incoming::use_cases::SettingsOverview;
use crate::shared::api::ApiResponse;
use crate::shared::html::render_html;
use crate::AppState;

#[derive(Template)]
#[template(path = "settings.html")]
struct SettingsTemplate {
    overview: SettingsOverview,
    rows: Vec<(String, String)>,
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "None".to_string(),
        other => other.to_string(),
    }
}

#[get("/settings/")]
pub async fn settings_page_handler(data: web::Data<AppState>) -> impl Responder {
    match data.settings.get.execute().await {
        Ok(overview) => {
            let rows = overview
                .settings
                .iter()
                .map(|(key, value)| (key.clone(), display_value(value)))
                .collect();
            render_html(&SettingsTemplate { overview, rows })
        }
        Err(e) => {
            error!("Failed to load settings: {}", e);
            HttpResponse::InternalServerError().body("Failed to load settings")
        }
    }
}

#[get("/api/settings/")]
pub async fn settings_api_handler(data: web::Data<AppState>) -> impl Responder {
    match data.settings.get.execute().await {
        Ok(overview) => HttpResponse::Ok().json(json!({
            "success": true,
            "settings": overview.settings,
            "app": overview.app,
            "stats": overview.stats,
        })),
        Err(e) => {
            error!("Failed to load settings: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::settings::application::ports::incoming::use_cases::{
        AppInfo, GetSettingsError, GetSettingsUseCase, SettingsStats,
    };
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use std::collections::BTreeMap;
    use std::sync::Arc;

    struct FixedSettings;

    #[async_trait]
    impl GetSettingsUseCase for FixedSettings {
        async fn execute(&self) -> Result<SettingsOverview, GetSettingsError> {
            let mut settings = BTreeMap::new();
            settings.insert("DEBUG".to_string(), json!(false));
            settings.insert("REDIS_URL".to_string(), Value::Null);
            settings.insert("TIME_ZONE".to_string(), json!("UTC"));
            Ok(SettingsOverview {
                settings,
                app: AppInfo {
                    name: "CV Management System".to_string(),
                    version: "0.1.0".to_string(),
                    environment: "Production".to_string(),
                },
                stats: SettingsStats {
                    total_cvs: 3,
                    total_request_logs: 42,
                    database_vendor: "postgresql".to_string(),
                },
            })
        }
    }

    #[actix_web::test]
    async fn api_returns_settings_app_and_stats() {
        let app_state = TestAppStateBuilder::default()
            .with_get_settings(Arc::new(FixedSettings))
            .build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(settings_api_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/settings/").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["settings"]["TIME_ZONE"], "UTC");
        assert_eq!(body["app"]["environment"], "Production");
        assert_eq!(body["stats"]["total_cvs"], 3);
        assert_eq!(body["stats"]["database_vendor"], "postgresql");
    }

    #[actix_web::test]
    async fn page_lists_settings() {
        let app_state = TestAppStateBuilder::default()
            .with_get_settings(Arc::new(FixedSettings))
            .build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(settings_page_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/settings/").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let html = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
        assert!(html.contains("TIME_ZONE"));
        assert!(html.contains("<td>UTC</td>"));
        assert!(html.contains("<td>None</td>"));
        assert!(html.contains("42 logged requests"));
    }
}
