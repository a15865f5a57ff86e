use crate::modules::request_log::application::ports::outgoing::NewRequestLog;

/// Called by the logging middleware once the response is known. Implementations
/// must not block the request; persistence failures are logged, never returned.
pub trait RecordRequestUseCase: Send + Sync {
    fn record(&self, entry: NewRequestLog);
}
