pub mod ports;
pub mod service;
pub mod translation_use_cases;
