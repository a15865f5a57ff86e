use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppInfo {
    pub name: String,
    pub version: String,
    pub environment: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SettingsStats {
    pub total_cvs: u64,
    pub total_request_logs: u64,
    pub database_vendor: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SettingsOverview {
    pub settings: BTreeMap<String, Value>,
    pub app: AppInfo,
    pub stats: SettingsStats,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetSettingsError {
    #[error("Failed to collect statistics: {0}")]
    StatsFailed(String),
}

#[async_trait]
pub trait GetSettingsUseCase: Send + Sync {
    async fn execute(&self) -> Result<SettingsOverview, GetSettingsError>;
}
