use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{error, info};

use crate::modules::jobs::application::service::JobDispatcher;
use crate::modules::jobs::domain::{JobError, JobKind, RetryPolicy};
use crate::modules::request_log::application::ports::incoming::use_cases::CleanupRequestLogsUseCase;

pub const CLEANUP_PERIOD: Duration = Duration::from_secs(24 * 60 * 60);

/// Body of the `cleanup_old_request_logs` job.
pub async fn cleanup_old_request_logs(
    cleanup: &(dyn CleanupRequestLogsUseCase + Send + Sync),
    days: u32,
) -> Result<Value, JobError> {
    match cleanup.execute(days).await {
        Ok(outcome) => {
            info!(
                deleted_count = outcome.deleted_count,
                days, "Cleaned up old request logs"
            );
            Ok(json!({
                "success": true,
                "deleted_count": outcome.deleted_count,
                "cutoff_date": outcome.cutoff_date.to_rfc3339(),
            }))
        }
        Err(e) => Err(JobError::Permanent(e.to_string())),
    }
}

/// Queue the request-log cleanup every `period`, starting one period from now.
pub fn spawn_request_log_cleanup(
    dispatcher: JobDispatcher,
    cleanup: Arc<dyn CleanupRequestLogsUseCase + Send + Sync>,
    days: u32,
    period: Duration,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;

            let cleanup = Arc::clone(&cleanup);
            let queued = dispatcher
                .dispatch(JobKind::CleanupRequestLogs, RetryPolicy::none(), move || {
                    let cleanup = Arc::clone(&cleanup);
                    async move { cleanup_old_request_logs(cleanup.as_ref(), days).await }
                })
                .await;

            if let Err(e) = queued {
                error!("Failed to queue request log cleanup: {}", e);
            }
        }
    })
}
