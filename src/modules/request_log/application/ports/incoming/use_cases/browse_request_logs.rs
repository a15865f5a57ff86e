use async_trait::async_trait;
use serde::Serialize;

use crate::modules::request_log::application::ports::outgoing::{
    RequestLogFilter, RequestLogStats, RequestLogView,
};
use crate::shared::pagination::{PageRequest, PageResult};

#[derive(Debug, Clone, Serialize)]
pub struct RequestLogPage {
    pub logs: PageResult<RequestLogView>,
    pub stats: RequestLogStats,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum BrowseRequestLogsError {
    #[error("Failed to fetch request logs: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait BrowseRequestLogsUseCase: Send + Sync {
    async fn execute(
        &self,
        filter: RequestLogFilter,
        page: PageRequest,
    ) -> Result<RequestLogPage, BrowseRequestLogsError>;
}
