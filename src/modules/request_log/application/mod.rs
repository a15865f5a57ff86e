pub mod ports;
pub mod request_log_use_cases;
pub mod service;
