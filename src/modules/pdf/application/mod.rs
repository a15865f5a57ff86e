pub mod pdf_use_cases;
pub mod ports;
pub mod service;
