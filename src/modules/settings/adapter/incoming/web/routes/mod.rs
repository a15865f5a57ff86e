mod settings;

pub use settings::{settings_api_handler, settings_page_handler};
