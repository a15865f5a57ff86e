use crate::modules::cv::application::ports::outgoing::CvDetailView;

#[derive(Debug, Clone, PartialEq)]
pub struct EmailBodies {
    pub html: String,
    pub text: String,
}

pub trait EmailBodyRenderer: Send + Sync {
    fn render_cv_email(
        &self,
        cv: &CvDetailView,
        recipient: &str,
        sender_name: &str,
    ) -> Result<EmailBodies, String>;
}
