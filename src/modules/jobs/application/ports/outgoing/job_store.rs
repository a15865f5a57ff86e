use async_trait::async_trait;

use crate::modules::jobs::domain::{JobId, JobRecord};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum JobStoreError {
    #[error("Job store connection error: {0}")]
    Connection(String),

    #[error("Corrupt job record: {0}")]
    Serialization(String),
}

/// Where job states and results live while clients poll for them.
#[async_trait]
pub trait JobStore: Send + Sync {
    async fn save(&self, record: &JobRecord) -> Result<(), JobStoreError>;

    async fn get(&self, job_id: &JobId) -> Result<Option<JobRecord>, JobStoreError>;
}
