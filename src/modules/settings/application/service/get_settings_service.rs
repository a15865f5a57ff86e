use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

use crate::modules::cv::application::ports::outgoing::CvQuery;
use crate::modules::request_log::application::ports::outgoing::RequestLogQuery;
use crate::modules::settings::application::ports::incoming::use_cases::{
    AppInfo, GetSettingsError, GetSettingsUseCase, SettingsOverview, SettingsStats,
};
use crate::modules::settings::domain::{
    environment_label, visible_settings, APP_NAME, APP_VERSION,
};

pub struct GetSettingsService {
    entries: Vec<(String, Value)>,
    debug: bool,
    cv_query: Arc<dyn CvQuery + Send + Sync>,
    log_query: Arc<dyn RequestLogQuery + Send + Sync>,
}

impl GetSettingsService {
    /// `entries` is the raw configuration snapshot; filtering happens per request.
    pub fn new(
        entries: Vec<(String, Value)>,
        debug: bool,
        cv_query: Arc<dyn CvQuery + Send + Sync>,
        log_query: Arc<dyn RequestLogQuery + Send + Sync>,
    ) -> Self {
        Self {
            entries,
            debug,
            cv_query,
            log_query,
        }
    }
}

#[async_trait]
impl GetSettingsUseCase for GetSettingsService {
    async fn execute(&self) -> Result<SettingsOverview, GetSettingsError> {
        let total_cvs = self
            .cv_query
            .count()
            .await
            .map_err(|e| GetSettingsError::StatsFailed(e.to_string()))?;
        let total_request_logs = self
            .log_query
            .count()
            .await
            .map_err(|e| GetSettingsError::StatsFailed(e.to_string()))?;

        Ok(SettingsOverview {
            settings: visible_settings(self.entries.clone()),
            app: AppInfo {
                name: APP_NAME.to_string(),
                version: APP_VERSION.to_string(),
                environment: environment_label(self.debug).to_string(),
            },
            stats: SettingsStats {
                total_cvs,
                total_request_logs,
                database_vendor: "postgresql".to_string(),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::cv::application::ports::outgoing::CvQueryError;
    use crate::modules::cv::application::service::test_doubles::{sample_cv_detail, MockCvQuery};
    use crate::modules::request_log::application::service::test_doubles::{
        sample_view, MockRequestLogQuery,
    };
    use serde_json::json;

    fn entries() -> Vec<(String, Value)> {
        vec![
            ("DEBUG".to_string(), json!(true)),
            ("SECRET_KEY".to_string(), json!("s3cret")),
            ("TIME_ZONE".to_string(), json!("UTC")),
        ]
    }

    #[tokio::test]
    async fn overview_hides_secrets_and_counts_rows() {
        let service = GetSettingsService::new(
            entries(),
            true,
            Arc::new(MockCvQuery::new(Ok(sample_cv_detail(1)))),
            Arc::new(MockRequestLogQuery::new(vec![sample_view(1, 200), sample_view(2, 404)])),
        );

        let overview = service.execute().await.unwrap();

        assert_eq!(overview.settings.len(), 2);
        assert!(!overview.settings.contains_key("SECRET_KEY"));
        assert_eq!(overview.settings["TIME_ZONE"], "UTC");
        assert_eq!(overview.app.name, "CV Management System");
        assert_eq!(overview.app.environment, "Development");
        assert_eq!(overview.stats.total_cvs, 1);
        assert_eq!(overview.stats.total_request_logs, 2);
        assert_eq!(overview.stats.database_vendor, "postgresql");
    }

    #[tokio::test]
    async fn count_failures_are_reported() {
        let service = GetSettingsService::new(
            entries(),
            false,
            Arc::new(MockCvQuery::new(Err(CvQueryError::DatabaseError("down".to_string())))),
            Arc::new(MockRequestLogQuery::new(vec![])),
        );

        assert!(matches!(
            service.execute().await.unwrap_err(),
            GetSettingsError::StatsFailed(_)
        ));
    }
}
