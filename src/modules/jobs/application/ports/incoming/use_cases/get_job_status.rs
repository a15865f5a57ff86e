use async_trait::async_trait;

use crate::modules::jobs::domain::{JobId, JobRecord};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetJobStatusError {
    #[error("Job store unavailable: {0}")]
    StoreFailed(String),
}

#[async_trait]
pub trait GetJobStatusUseCase: Send + Sync {
    /// Unknown ids come back as a PENDING record.
    async fn execute(&self, job_id: JobId) -> Result<JobRecord, GetJobStatusError>;
}
