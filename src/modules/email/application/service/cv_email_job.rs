use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::modules::cv::application::ports::outgoing::{CvQuery, CvQueryError};
use crate::modules::email::application::ports::outgoing::{
    EmailBodies, EmailBodyRenderer, EmailSender,
};
use crate::modules::email::domain::{
    cv_email_subject, sender_display_name, Attachment, OutgoingEmail, PDF_CONTENT_TYPE,
};
use crate::modules::jobs::domain::JobError;
use crate::modules::pdf::application::ports::outgoing::CvPdfRenderer;
use crate::modules::pdf::domain::pdf_filename;

/// Body of the `send_cv_pdf_email` job: render the CV as PDF and mail it.
pub struct CvEmailJob {
    cv_query: Arc<dyn CvQuery + Send + Sync>,
    pdf: Arc<dyn CvPdfRenderer + Send + Sync>,
    bodies: Arc<dyn EmailBodyRenderer + Send + Sync>,
    sender: Arc<dyn EmailSender + Send + Sync>,
}

impl CvEmailJob {
    pub fn new(
        cv_query: Arc<dyn CvQuery + Send + Sync>,
        pdf: Arc<dyn CvPdfRenderer + Send + Sync>,
        bodies: Arc<dyn EmailBodyRenderer + Send + Sync>,
        sender: Arc<dyn EmailSender + Send + Sync>,
    ) -> Self {
        Self {
            cv_query,
            pdf,
            bodies,
            sender,
        }
    }

    pub async fn run(
        &self,
        cv_id: i32,
        recipient: &str,
        sender_name: Option<&str>,
    ) -> Result<Value, JobError> {
        let cv = match self.cv_query.get_detail(cv_id).await {
            Ok(cv) => cv,
            Err(CvQueryError::NotFound) => {
                error!(cv_id, "CV does not exist");
                return Err(JobError::Permanent(format!("CV with ID {cv_id} not found")));
            }
            Err(CvQueryError::DatabaseError(e)) => return Err(JobError::Retryable(e)),
        };

        let pdf = self.pdf.render(&cv).map_err(|e| {
            error!(cv_id, "Failed to generate PDF: {}", e);
            JobError::Retryable(e.to_string())
        })?;

        let sender_name = sender_display_name(sender_name);
        let bodies = self
            .bodies
            .render_cv_email(&cv, recipient, &sender_name)
            .unwrap_or_else(|e| {
                warn!("Failed to render email templates: {}", e);
                fallback_bodies(&cv.full_name, &sender_name)
            });

        let filename = pdf_filename(&cv.full_name);
        let email = OutgoingEmail {
            to: recipient.to_string(),
            subject: cv_email_subject(&cv.full_name),
            text_body: bodies.text,
            html_body: bodies.html,
            attachments: vec![Attachment {
                filename: filename.clone(),
                content_type: PDF_CONTENT_TYPE.to_string(),
                bytes: pdf,
            }],
        };

        self.sender.send(email).await.map_err(|e| {
            error!(cv_id, recipient, "Failed to send email: {}", e);
            if e.is_transient() {
                JobError::Retryable(e.to_string())
            } else {
                JobError::Permanent(e.to_string())
            }
        })?;

        info!(cv_id, recipient, "CV PDF email sent");

        Ok(json!({
            "success": true,
            "message": format!("CV sent successfully to {recipient}"),
            "cv_name": cv.full_name,
            "recipient": recipient,
            "filename": filename,
        }))
    }
}

fn fallback_bodies(full_name: &str, sender_name: &str) -> EmailBodies {
    EmailBodies {
        html: format!(
            "<html><body><h2>CV: {full_name}</h2>\
             <p>Please find attached the CV for {full_name}.</p>\
             <p>Best regards,<br>{sender_name}</p></body></html>"
        ),
        text: format!(
            "CV: {full_name}\n\nPlease find attached the CV for {full_name}.\n\nBest regards,\n{sender_name}"
        ),
    }
}
