mod api_overview;
mod create_cv;
mod delete_cv;
mod get_cvs;
mod get_single_cv;
mod update_cv;

pub use api_overview::api_overview_handler;
pub use create_cv::{create_cv_handler, CvRequest};
pub use delete_cv::delete_cv_handler;
pub use get_cvs::get_cvs_handler;
pub use get_single_cv::get_single_cv_handler;
pub use update_cv::{patch_cv_handler, update_cv_handler, PatchCvRequest};
