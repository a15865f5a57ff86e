mod browse_logs;

pub use browse_logs::{request_logs_api_handler, request_logs_page_handler, LogsQuery};
