use async_trait::async_trait;
use tracing::info;

use crate::modules::email::application::ports::outgoing::{EmailSendError, EmailSender};
use crate::modules::email::domain::OutgoingEmail;

/// Development sender used when no SMTP server is configured.
pub struct ConsoleEmailSender {
    from_email: String,
}

impl ConsoleEmailSender {
    pub fn new(from_email: &str) -> Self {
        Self {
            from_email: from_email.to_string(),
        }
    }
}

#[async_trait]
impl EmailSender for ConsoleEmailSender {
    async fn send(&self, email: OutgoingEmail) -> Result<(), EmailSendError> {
        let attachments: Vec<&str> = email
            .attachments
            .iter()
            .map(|a| a.filename.as_str())
            .collect();

        info!(
            from = %self.from_email,
            to = %email.to,
            subject = %email.subject,
            attachments = ?attachments,
            "Email (console backend)\n{}",
            email.text_body
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn console_sender_always_succeeds() {
        let sender = ConsoleEmailSender::new("noreply@localhost");
        let email = OutgoingEmail {
            to: "hr@example.com".to_string(),
            subject: "CV: Ada Lovelace".to_string(),
            text_body: "Please find attached".to_string(),
            html_body: "<p>Please find attached</p>".to_string(),
            attachments: vec![],
        };

        assert!(sender.send(email).await.is_ok());
    }
}
