use async_trait::async_trait;
use chrono::{Duration, Utc};
use tracing::info;

use crate::modules::request_log::application::ports::incoming::use_cases::{
    CleanupOutcome, CleanupRequestLogsError, CleanupRequestLogsUseCase,
};
use crate::modules::request_log::application::ports::outgoing::RequestLogRepository;

pub struct CleanupRequestLogsService<R>
where
    R: RequestLogRepository,
{
    repository: R,
}

impl<R> CleanupRequestLogsService<R>
where
    R: RequestLogRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CleanupRequestLogsUseCase for CleanupRequestLogsService<R>
where
    R: RequestLogRepository + Send + Sync,
{
    async fn execute(&self, days: u32) -> Result<CleanupOutcome, CleanupRequestLogsError> {
        let cutoff_date = Utc::now() - Duration::days(i64::from(days));

        let deleted_count = self
            .repository
            .delete_older_than(cutoff_date)
            .await
            .map_err(|e| CleanupRequestLogsError::RepositoryError(e.to_string()))?;

        info!(deleted_count, days, "Deleted old request logs");

        Ok(CleanupOutcome {
            deleted_count,
            cutoff_date,
        })
    }
}
