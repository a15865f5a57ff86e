use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::shared::pagination::{PageRequest, PageResult};

/// Viewer filters. Empty strings are treated as absent by the caller.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestLogFilter {
    pub method: Option<String>,
    pub status: Option<u16>,
    /// Case-insensitive contains.
    pub path: Option<String>,
    pub ip: Option<String>,
    /// Inclusive calendar days (UTC).
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequestLogView {
    pub id: i64,
    pub method: String,
    pub path: String,
    pub query_string: String,
    pub remote_ip: String,
    pub user_agent: String,
    pub response_status: Option<u16>,
    pub response_time_ms: Option<f64>,
    pub timestamp: DateTime<Utc>,
}

impl RequestLogView {
    pub fn is_error(&self) -> bool {
        self.response_status.is_some_and(|s| s >= 400)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RequestLogStats {
    pub total: u64,
    pub avg_response_time_ms: Option<f64>,
    /// Responses with status >= 400.
    pub error_count: u64,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RequestLogQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait RequestLogQuery: Send + Sync {
    /// Newest first.
    async fn list(
        &self,
        filter: &RequestLogFilter,
        page: PageRequest,
    ) -> Result<PageResult<RequestLogView>, RequestLogQueryError>;

    async fn stats(&self, filter: &RequestLogFilter) -> Result<RequestLogStats, RequestLogQueryError>;

    async fn count(&self) -> Result<u64, RequestLogQueryError>;
}
