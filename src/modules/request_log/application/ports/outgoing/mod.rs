pub mod request_log_query;
pub mod request_log_repository;

pub use request_log_query::{
    RequestLogFilter, RequestLogQuery, RequestLogQueryError, RequestLogStats, RequestLogView,
};
pub use request_log_repository::{NewRequestLog, RequestLogRepository, RequestLogRepositoryError};
