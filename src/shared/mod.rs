pub mod api;
pub mod db_error;
pub mod html;
pub mod pagination;
pub mod patch_field;
pub mod sql_pattern;
pub mod validation;
