pub mod contact;
pub mod cv;
pub mod email;
pub mod jobs;
pub mod pages;
pub mod pdf;
pub mod project;
pub mod request_log;
pub mod settings;
pub mod skill;
pub mod translation;
