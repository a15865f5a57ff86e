use std::sync::Arc;

use crate::modules::jobs::application::ports::incoming::use_cases::GetJobStatusUseCase;

#[derive(Clone)]
pub struct JobUseCases {
    pub status: Arc<dyn GetJobStatusUseCase + Send + Sync>,
}
