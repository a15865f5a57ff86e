mod cv_email_job;
mod send_cv_email_service;

#[cfg(test)]
pub(crate) mod test_doubles;

pub use cv_email_job::CvEmailJob;
pub use send_cv_email_service::SendCvEmailService;
