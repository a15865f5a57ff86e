use serde_json::Value;
use std::future::Future;
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::modules::jobs::application::ports::outgoing::{JobStore, JobStoreError};
use crate::modules::jobs::domain::{JobError, JobId, JobKind, JobRecord, JobState, RetryPolicy};

/// Runs job bodies on the tokio runtime and records every state change in
/// the job store. No cancellation and no ordering between jobs.
#[derive(Clone)]
pub struct JobDispatcher {
    store: Arc<dyn JobStore + Send + Sync>,
}

impl JobDispatcher {
    pub fn new(store: Arc<dyn JobStore + Send + Sync>) -> Self {
        Self { store }
    }

    /// Record the job as PENDING, spawn it and return its polling id.
    /// `body` is called once per attempt.
    pub async fn dispatch<F, Fut>(
        &self,
        kind: JobKind,
        policy: RetryPolicy,
        body: F,
    ) -> Result<JobId, JobStoreError>
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Value, JobError>> + Send + 'static,
    {
        let record = JobRecord::pending(JobId::new(), Some(kind));
        self.store.save(&record).await?;

        let job_id = record.id.clone();
        info!(job_id = %job_id, ?kind, "Job queued");

        let store = Arc::clone(&self.store);
        tokio::spawn(run(store, record, kind, policy, body));

        Ok(job_id)
    }
}

async fn run<F, Fut>(
    store: Arc<dyn JobStore + Send + Sync>,
    mut record: JobRecord,
    kind: JobKind,
    policy: RetryPolicy,
    body: F,
) where
    F: Fn() -> Fut + Send + Sync,
    Fut: Future<Output = Result<Value, JobError>> + Send,
{
    loop {
        record.attempts += 1;
        record.transition(JobState::Started);
        persist(store.as_ref(), &record).await;

        match body().await {
            Ok(result) => {
                record.result = Some(result);
                record.error = None;
                record.transition(JobState::Success);
                info!(job_id = %record.id, attempts = record.attempts, "Job succeeded");
                break;
            }
            Err(JobError::Retryable(e)) if record.attempts <= policy.max_retries => {
                warn!(
                    job_id = %record.id,
                    attempt = record.attempts,
                    "Retrying job: {}", e
                );
                record.error = Some(e);
                record.transition(JobState::Retry);
                persist(store.as_ref(), &record).await;
                tokio::time::sleep(policy.delay).await;
            }
            Err(JobError::Retryable(e)) => {
                let message = format!(
                    "{} after {} attempts: {}",
                    kind.failure_prefix(),
                    policy.max_retries,
                    e
                );
                error!(job_id = %record.id, "{}", message);
                record.error = Some(message);
                record.transition(JobState::Failure);
                break;
            }
            Err(JobError::Permanent(e)) => {
                error!(job_id = %record.id, "Job failed: {}", e);
                record.error = Some(e);
                record.transition(JobState::Failure);
                break;
            }
        }
    }

    persist(store.as_ref(), &record).await;
}

async fn persist(store: &(dyn JobStore + Send + Sync), record: &JobRecord) {
    if let Err(e) = store.save(record).await {
        error!(job_id = %record.id, state = %record.state, "Failed to store job state: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::jobs::adapter::outgoing::MemoryJobStore;
    use serde_json::json;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::time::Duration;

    async fn wait_until_finished(store: &MemoryJobStore, id: &JobId) -> JobRecord {
        for _ in 0..200 {
            if let Some(record) = store.get(id).await.unwrap() {
                if record.state.is_finished() {
                    return record;
                }
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        panic!("job {id} did not finish");
    }

    fn quick(max_retries: u32) -> RetryPolicy {
        RetryPolicy {
            max_retries,
            delay: Duration::ZERO,
        }
    }

    #[tokio::test]
    async fn successful_job_stores_result() {
        let store = Arc::new(MemoryJobStore::new());
        let dispatcher = JobDispatcher::new(store.clone());

        let id = dispatcher
            .dispatch(JobKind::SendCvPdfEmail, quick(3), || async {
                Ok(json!({ "success": true }))
            })
            .await
            .unwrap();

        let record = wait_until_finished(&store, &id).await;
        assert_eq!(record.state, JobState::Success);
        assert_eq!(record.result, Some(json!({ "success": true })));
        assert_eq!(record.attempts, 1);
    }

    #[tokio::test]
    async fn retryable_errors_are_retried_then_succeed() {
        let store = Arc::new(MemoryJobStore::new());
        let dispatcher = JobDispatcher::new(store.clone());
        let calls = Arc::new(AtomicU32::new(0));

        let counter = calls.clone();
        let id = dispatcher
            .dispatch(JobKind::SendCvPdfEmail, quick(3), move || {
                let counter = counter.clone();
                async move {
                    if counter.fetch_add(1, Ordering::SeqCst) < 2 {
                        Err(JobError::Retryable("smtp timeout".to_string()))
                    } else {
                        Ok(json!({}))
                    }
                }
            })
            .await
            .unwrap();

        let record = wait_until_finished(&store, &id).await;
        assert_eq!(record.state, JobState::Success);
        assert_eq!(record.attempts, 3);
        assert_eq!(record.error, None);
    }

    #[tokio::test]
    async fn exhausted_retries_report_last_error() {
        let store = Arc::new(MemoryJobStore::new());
        let dispatcher = JobDispatcher::new(store.clone());

        let id = dispatcher
            .dispatch(JobKind::TranslateCvContent, quick(2), || async {
                Err(JobError::Retryable("rate limited".to_string()))
            })
            .await
            .unwrap();

        let record = wait_until_finished(&store, &id).await;
        assert_eq!(record.state, JobState::Failure);
        assert_eq!(record.attempts, 3);
        assert_eq!(
            record.error.as_deref(),
            Some("Translation failed after 2 attempts: rate limited")
        );
    }

    #[tokio::test]
    async fn permanent_errors_fail_immediately() {
        let store = Arc::new(MemoryJobStore::new());
        let dispatcher = JobDispatcher::new(store.clone());

        let id = dispatcher
            .dispatch(JobKind::SendCvPdfEmail, quick(3), || async {
                Err(JobError::Permanent("CV with ID 9 not found".to_string()))
            })
            .await
            .unwrap();

        let record = wait_until_finished(&store, &id).await;
        assert_eq!(record.state, JobState::Failure);
        assert_eq!(record.attempts, 1);
        assert_eq!(record.error.as_deref(), Some("CV with ID 9 not found"));
    }
}
