mod action;
mod json_config;
mod response;

pub use action::{action_error, method_not_allowed, parse_action_body};
pub use json_config::custom_json_config;
pub use response::{ApiError, ApiResponse};
