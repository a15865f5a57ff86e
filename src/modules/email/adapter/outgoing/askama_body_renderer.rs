use askama::Template;

use crate::modules::cv::application::ports::outgoing::CvDetailView;
use crate::modules::email::application::ports::outgoing::{EmailBodies, EmailBodyRenderer};

#[derive(Template)]
#[template(path = "emails/cv_pdf_email.html")]
struct CvEmailHtml<'a> {
    cv: &'a CvDetailView,
    recipient: &'a str,
    sender_name: &'a str,
}

#[derive(Template)]
#[template(path = "emails/cv_pdf_email.txt")]
struct CvEmailText<'a> {
    cv: &'a CvDetailView,
    recipient: &'a str,
    sender_name: &'a str,
}

pub struct AskamaEmailBodyRenderer;

impl EmailBodyRenderer for AskamaEmailBodyRenderer {
    fn render_cv_email(
        &self,
        cv: &CvDetailView,
        recipient: &str,
        sender_name: &str,
    ) -> Result<EmailBodies, String> {
        let html = CvEmailHtml {
            cv,
            recipient,
            sender_name,
        }
        .render()
        .map_err(|e| e.to_string())?;

        let text = CvEmailText {
            cv,
            recipient,
            sender_name,
        }
        .render()
        .map_err(|e| e.to_string())?;

        Ok(EmailBodies { html, text })
    }
}
