mod get_job_status_service;
mod job_dispatcher;
mod scheduler;

pub use get_job_status_service::GetJobStatusService;
pub use job_dispatcher::JobDispatcher;
pub use scheduler::{cleanup_old_request_logs, spawn_request_log_cleanup, CLEANUP_PERIOD};
