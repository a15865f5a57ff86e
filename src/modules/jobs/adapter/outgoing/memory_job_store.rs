use async_trait::async_trait;
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::time::Instant;

use crate::modules::jobs::application::ports::outgoing::{JobStore, JobStoreError};
use crate::modules::jobs::domain::{JobId, JobRecord};

const DEFAULT_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// Process-local job store used when no `REDIS_URL` is configured and in
/// tests. A record expires `ttl` after its last save, like the Redis key.
pub struct MemoryJobStore {
    ttl: Duration,
    records: RwLock<HashMap<JobId, (Instant, JobRecord)>>,
}

impl Default for MemoryJobStore {
    fn default() -> Self {
        Self::with_ttl(DEFAULT_TTL)
    }
}

impl MemoryJobStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            ttl,
            records: RwLock::new(HashMap::new()),
        }
    }

    fn is_live(&self, saved_at: Instant, now: Instant) -> bool {
        now.duration_since(saved_at) < self.ttl
    }
}

#[async_trait]
impl JobStore for MemoryJobStore {
    async fn save(&self, record: &JobRecord) -> Result<(), JobStoreError> {
        let now = Instant::now();
        let mut records = self.records.write().await;
        records.retain(|_, (saved_at, _)| self.is_live(*saved_at, now));
        records.insert(record.id.clone(), (now, record.clone()));
        Ok(())
    }

    async fn get(&self, job_id: &JobId) -> Result<Option<JobRecord>, JobStoreError> {
        let now = Instant::now();
        Ok(self
            .records
            .read()
            .await
            .get(job_id)
            .filter(|(saved_at, _)| self.is_live(*saved_at, now))
            .map(|(_, record)| record.clone()))
    }
}
