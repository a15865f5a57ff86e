mod browse_request_logs_service;
mod cleanup_request_logs_service;
mod record_request_service;

#[cfg(test)]
pub(crate) mod test_doubles;

pub use browse_request_logs_service::BrowseRequestLogsService;
pub use cleanup_request_logs_service::CleanupRequestLogsService;
pub use record_request_service::RecordRequestService;
