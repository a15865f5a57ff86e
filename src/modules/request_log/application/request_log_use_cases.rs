use std::sync::Arc;

use crate::modules::request_log::application::ports::incoming::use_cases::{
    BrowseRequestLogsUseCase, CleanupRequestLogsUseCase, RecordRequestUseCase,
};

#[derive(Clone)]
pub struct RequestLogUseCases {
    pub record: Arc<dyn RecordRequestUseCase + Send + Sync>,
    pub browse: Arc<dyn BrowseRequestLogsUseCase + Send + Sync>,
    pub cleanup: Arc<dyn CleanupRequestLogsUseCase + Send + Sync>,
}
