use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CleanupOutcome {
    pub deleted_count: u64,
    pub cutoff_date: DateTime<Utc>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CleanupRequestLogsError {
    #[error("Cleanup failed: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CleanupRequestLogsUseCase: Send + Sync {
    /// Delete logs older than `days` days.
    async fn execute(&self, days: u32) -> Result<CleanupOutcome, CleanupRequestLogsError>;
}
