mod get_settings_service;

pub use get_settings_service::GetSettingsService;
