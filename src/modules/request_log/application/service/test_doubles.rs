use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use std::sync::Mutex;
use tokio::sync::mpsc;

use crate::modules::request_log::application::ports::outgoing::{
    NewRequestLog, RequestLogFilter, RequestLogQuery, RequestLogQueryError, RequestLogRepository,
    RequestLogRepositoryError, RequestLogStats, RequestLogView,
};
use crate::shared::pagination::{PageRequest, PageResult};

pub fn sample_entry(path: &str) -> NewRequestLog {
    NewRequestLog {
        method: "GET".to_string(),
        path: path.to_string(),
        query_string: String::new(),
        remote_ip: "127.0.0.1".to_string(),
        user_agent: "test-agent".to_string(),
        response_status: 200,
        response_time_ms: 1.5,
    }
}

pub fn sample_view(id: i64, status: u16) -> RequestLogView {
    RequestLogView {
        id,
        method: "GET".to_string(),
        path: "/api/cvs/".to_string(),
        query_string: String::new(),
        remote_ip: "127.0.0.1".to_string(),
        user_agent: "test-agent".to_string(),
        response_status: Some(status),
        response_time_ms: Some(12.0),
        timestamp: Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap(),
    }
}

/// Reports every repository call on a channel so tests can await spawned work.
pub struct ChannelRepo {
    pub events: mpsc::UnboundedSender<RepoEvent>,
    pub fail_inserts: bool,
    pub deleted: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RepoEvent {
    Inserted(NewRequestLog),
    Deleted(DateTime<Utc>),
    Pruned { keep_recent: u64 },
}

impl ChannelRepo {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<RepoEvent>) {
        let (events, rx) = mpsc::unbounded_channel();
        (
            Self {
                events,
                fail_inserts: false,
                deleted: 0,
            },
            rx,
        )
    }
}

#[async_trait]
impl RequestLogRepository for ChannelRepo {
    async fn insert(&self, entry: NewRequestLog) -> Result<(), RequestLogRepositoryError> {
        let _ = self.events.send(RepoEvent::Inserted(entry));
        if self.fail_inserts {
            return Err(RequestLogRepositoryError::DatabaseError("insert failed".to_string()));
        }
        Ok(())
    }

    async fn delete_older_than(
        &self,
        cutoff: DateTime<Utc>,
    ) -> Result<u64, RequestLogRepositoryError> {
        let _ = self.events.send(RepoEvent::Deleted(cutoff));
        Ok(self.deleted)
    }

    async fn prune(
        &self,
        _cutoff: DateTime<Utc>,
        keep_recent: u64,
    ) -> Result<u64, RequestLogRepositoryError> {
        let _ = self.events.send(RepoEvent::Pruned { keep_recent });
        Ok(0)
    }
}

pub struct MockRequestLogQuery {
    pub rows: Vec<RequestLogView>,
    pub last_filter: Mutex<Option<RequestLogFilter>>,
}

impl MockRequestLogQuery {
    pub fn new(rows: Vec<RequestLogView>) -> Self {
        Self {
            rows,
            last_filter: Mutex::new(None),
        }
    }
}

#[async_trait]
impl RequestLogQuery for MockRequestLogQuery {
    async fn list(
        &self,
        filter: &RequestLogFilter,
        page: PageRequest,
    ) -> Result<PageResult<RequestLogView>, RequestLogQueryError> {
        *self.last_filter.lock().unwrap() = Some(filter.clone());
        Ok(PageResult {
            items: self.rows.clone(),
            page: page.page,
            per_page: page.per_page,
            total: self.rows.len() as u64,
        })
    }

    async fn stats(&self, _filter: &RequestLogFilter) -> Result<RequestLogStats, RequestLogQueryError> {
        Ok(RequestLogStats {
            total: self.rows.len() as u64,
            avg_response_time_ms: None,
            error_count: self.rows.iter().filter(|r| r.is_error()).count() as u64,
        })
    }

    async fn count(&self) -> Result<u64, RequestLogQueryError> {
        Ok(self.rows.len() as u64)
    }
}
