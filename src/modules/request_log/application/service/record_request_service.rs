use chrono::{Duration, Utc};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{debug, error, info};

use crate::config::RequestLogConfig;
use crate::modules::request_log::application::ports::incoming::use_cases::RecordRequestUseCase;
use crate::modules::request_log::application::ports::outgoing::{
    NewRequestLog, RequestLogRepository,
};

/// Persists audit rows on background tasks and, every `cleanup_every`
/// recorded requests, prunes old rows beyond the `keep_recent` newest.
pub struct RecordRequestService<R>
where
    R: RequestLogRepository + 'static,
{
    repository: Arc<R>,
    settings: RequestLogConfig,
    recorded: AtomicU64,
}

impl<R> RecordRequestService<R>
where
    R: RequestLogRepository + 'static,
{
    pub fn new(repository: Arc<R>, settings: RequestLogConfig) -> Self {
        Self {
            repository,
            settings,
            recorded: AtomicU64::new(0),
        }
    }

    fn spawn_prune(&self) {
        let repository = Arc::clone(&self.repository);
        let cutoff = Utc::now() - Duration::days(i64::from(self.settings.retention_days));
        let keep_recent = self.settings.keep_recent;

        tokio::spawn(async move {
            match repository.prune(cutoff, keep_recent).await {
                Ok(deleted) => info!(deleted, keep_recent, "Pruned old request logs"),
                Err(e) => error!("Request log cleanup failed: {}", e),
            }
        });
    }
}

impl<R> RecordRequestUseCase for RecordRequestService<R>
where
    R: RequestLogRepository + 'static,
{
    fn record(&self, entry: NewRequestLog) {
        let repository = Arc::clone(&self.repository);

        tokio::spawn(async move {
            let path = entry.path.clone();
            if let Err(e) = repository.insert(entry).await {
                error!(path = %path, "Error creating request log: {}", e);
            }
        });

        let recorded = self.recorded.fetch_add(1, Ordering::Relaxed) + 1;
        let every = self.settings.cleanup_every.max(1);
        if recorded % every == 0 {
            debug!(recorded, "Opportunistic request log cleanup");
            self.spawn_prune();
        }
    }
}
