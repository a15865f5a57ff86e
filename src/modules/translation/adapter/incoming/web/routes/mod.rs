mod translate_cv;
mod translation_status;

pub use translate_cv::translate_cv_handler;
pub use translation_status::{translation_status_body, translation_status_handler};
