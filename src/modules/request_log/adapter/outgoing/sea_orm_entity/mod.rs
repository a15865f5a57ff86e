pub mod request_logs;
