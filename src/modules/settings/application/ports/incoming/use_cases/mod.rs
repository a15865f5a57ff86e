mod get_settings;

pub use get_settings::{AppInfo, GetSettingsError, GetSettingsUseCase, SettingsOverview, SettingsStats};
