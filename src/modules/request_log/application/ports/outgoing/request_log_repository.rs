use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq)]
pub struct NewRequestLog {
    pub method: String,
    pub path: String,
    pub query_string: String,
    pub remote_ip: String,
    pub user_agent: String,
    pub response_status: u16,
    pub response_time_ms: f64,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RequestLogRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait RequestLogRepository: Send + Sync {
    /// Single-row insert.
    async fn insert(&self, entry: NewRequestLog) -> Result<(), RequestLogRepositoryError>;

    /// Delete every row older than `cutoff`. Returns the number removed.
    async fn delete_older_than(&self, cutoff: DateTime<Utc>)
        -> Result<u64, RequestLogRepositoryError>;

    /// Delete rows older than `cutoff` that are not among the `keep_recent`
    /// newest rows.
    async fn prune(
        &self,
        cutoff: DateTime<Utc>,
        keep_recent: u64,
    ) -> Result<u64, RequestLogRepositoryError>;
}
