mod send_cv_email;
mod task_status;

pub use send_cv_email::send_cv_email_handler;
pub use task_status::{task_status_body, task_status_handler};
