use async_trait::async_trait;
use mockall::mock;

use crate::modules::cv::application::ports::outgoing::CvDetailView;
use crate::modules::email::application::ports::outgoing::{
    EmailBodies, EmailBodyRenderer, EmailSendError, EmailSender,
};
use crate::modules::email::domain::OutgoingEmail;
use crate::modules::pdf::application::ports::outgoing::{CvPdfRenderer, PdfError};

mock! {
    pub EmailSenderMock {}
    #[async_trait]
    impl EmailSender for EmailSenderMock {
        async fn send(&self, email: OutgoingEmail) -> Result<(), EmailSendError>;
    }
}

pub struct StubPdf;

impl CvPdfRenderer for StubPdf {
    fn render(&self, _cv: &CvDetailView) -> Result<Vec<u8>, PdfError> {
        Ok(b"%PDF-1.3 stub".to_vec())
    }
}

pub struct StubBodies;

impl EmailBodyRenderer for StubBodies {
    fn render_cv_email(
        &self,
        cv: &CvDetailView,
        recipient: &str,
        sender_name: &str,
    ) -> Result<EmailBodies, String> {
        Ok(EmailBodies {
            html: format!("<p>{} for {recipient} from {sender_name}</p>", cv.full_name),
            text: format!("{} for {recipient} from {sender_name}", cv.full_name),
        })
    }
}

pub struct FailingBodies;

impl EmailBodyRenderer for FailingBodies {
    fn render_cv_email(
        &self,
        _cv: &CvDetailView,
        _recipient: &str,
        _sender_name: &str,
    ) -> Result<EmailBodies, String> {
        Err("template missing".to_string())
    }
}
