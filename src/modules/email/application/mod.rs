pub mod email_use_cases;
pub mod ports;
pub mod service;
