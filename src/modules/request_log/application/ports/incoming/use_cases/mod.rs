mod browse_request_logs;
mod cleanup_request_logs;
mod record_request;

pub use browse_request_logs::{BrowseRequestLogsError, BrowseRequestLogsUseCase, RequestLogPage};
pub use cleanup_request_logs::{
    CleanupOutcome, CleanupRequestLogsError, CleanupRequestLogsUseCase,
};
pub use record_request::RecordRequestUseCase;
