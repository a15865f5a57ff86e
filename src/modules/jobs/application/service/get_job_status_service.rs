use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::jobs::application::ports::incoming::use_cases::{
    GetJobStatusError, GetJobStatusUseCase,
};
use crate::modules::jobs::application::ports::outgoing::JobStore;
use crate::modules::jobs::domain::{JobId, JobRecord};

pub struct GetJobStatusService {
    store: Arc<dyn JobStore + Send + Sync>,
}

impl GetJobStatusService {
    pub fn new(store: Arc<dyn JobStore + Send + Sync>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl GetJobStatusUseCase for GetJobStatusService {
    async fn execute(&self, job_id: JobId) -> Result<JobRecord, GetJobStatusError> {
        let stored = self
            .store
            .get(&job_id)
            .await
            .map_err(|e| GetJobStatusError::StoreFailed(e.to_string()))?;

        Ok(stored.unwrap_or_else(|| JobRecord::pending(job_id, None)))
    }
}
