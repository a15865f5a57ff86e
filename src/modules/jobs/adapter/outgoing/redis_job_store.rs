use async_trait::async_trait;
use deadpool_redis::{redis::AsyncCommands, Pool};
use std::sync::Arc;
use std::time::Duration;

use crate::modules::jobs::application::ports::outgoing::{JobStore, JobStoreError};
use crate::modules::jobs::domain::{JobId, JobRecord};

/// Redis-backed job store.
///
/// Each job is one JSON string value:
/// ```text
/// jobs:record:{job_id} -> JobRecord JSON
/// ```
/// Every write refreshes the key TTL, so finished jobs expire `ttl` after
/// their last state change.
#[derive(Clone)]
pub struct RedisJobStore {
    pool: Arc<Pool>,
    ttl: Duration,
}

impl RedisJobStore {
    pub fn new(pool: Arc<Pool>, ttl: Duration) -> Self {
        Self { pool, ttl }
    }

    fn record_key(job_id: &JobId) -> String {
        format!("jobs:record:{job_id}")
    }

    async fn get_conn(&self) -> Result<deadpool_redis::Connection, JobStoreError> {
        self.pool
            .get()
            .await
            .map_err(|e| JobStoreError::Connection(format!("Pool error: {}", e)))
    }
}

#[async_trait]
impl JobStore for RedisJobStore {
    async fn save(&self, record: &JobRecord) -> Result<(), JobStoreError> {
        let payload = serde_json::to_string(record)
            .map_err(|e| JobStoreError::Serialization(e.to_string()))?;

        let mut conn = self.get_conn().await?;
        conn.set_ex::<_, _, ()>(
            Self::record_key(&record.id),
            payload,
            self.ttl.as_secs().max(1),
        )
        .await
        .map_err(|e| JobStoreError::Connection(e.to_string()))
    }

    async fn get(&self, job_id: &JobId) -> Result<Option<JobRecord>, JobStoreError> {
        let mut conn = self.get_conn().await?;
        let payload: Option<String> = conn
            .get(Self::record_key(job_id))
            .await
            .map_err(|e| JobStoreError::Connection(e.to_string()))?;

        payload
            .map(|raw| {
                serde_json::from_str(&raw).map_err(|e| JobStoreError::Serialization(e.to_string()))
            })
            .transpose()
    }
}
