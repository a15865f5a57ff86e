use async_trait::async_trait;
use lettre::message::{header::ContentType, Attachment, Mailbox, MultiPart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::config::SmtpRelay;
use crate::modules::email::application::ports::outgoing::{EmailSendError, EmailSender};
use crate::modules::email::domain::OutgoingEmail;

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: Message) -> Result<(), String>;
}

#[async_trait]
impl Mailer for AsyncSmtpTransport<Tokio1Executor> {
    async fn send(&self, email: Message) -> Result<(), String> {
        AsyncTransport::send(self, email)
            .await
            .map(|_resp| ())
            .map_err(|e| e.to_string())
    }
}

pub struct SmtpEmailSender {
    mailer: Box<dyn Mailer>,
    from_email: String,
}

impl SmtpEmailSender {
    pub fn new_with_mailer(mailer: Box<dyn Mailer>, from_email: &str) -> Self {
        Self {
            mailer,
            from_email: from_email.to_string(),
        }
    }

    /// Authenticated TLS relay.
    pub fn new(relay: &SmtpRelay, from_email: &str) -> Result<Self, EmailSendError> {
        let creds = Credentials::new(relay.username.clone(), relay.password.clone());

        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&relay.server)
            .map_err(|e| EmailSendError::Transport(e.to_string()))?
            .credentials(creds)
            .build();

        Ok(Self::new_with_mailer(Box::new(transport), from_email))
    }

    // Local/test constructor (Mailpit, MailHog, etc.)
    pub fn new_local(host: &str, port: u16, from_email: &str) -> Self {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(host)
            .port(port)
            .build();

        Self::new_with_mailer(Box::new(transport), from_email)
    }

    fn build_message(&self, email: OutgoingEmail) -> Result<Message, EmailSendError> {
        let from: Mailbox = self
            .from_email
            .parse()
            .map_err(|e| EmailSendError::InvalidAddress(format!("{}: {e}", self.from_email)))?;
        let to: Mailbox = email
            .to
            .parse()
            .map_err(|e| EmailSendError::InvalidAddress(format!("{}: {e}", email.to)))?;

        let mut body = MultiPart::mixed().multipart(MultiPart::alternative_plain_html(
            email.text_body,
            email.html_body,
        ));
        for attachment in email.attachments {
            let content_type = ContentType::parse(&attachment.content_type)
                .map_err(|e| EmailSendError::Build(e.to_string()))?;
            body = body.singlepart(
                Attachment::new(attachment.filename).body(attachment.bytes, content_type),
            );
        }

        Message::builder()
            .from(from)
            .to(to)
            .subject(email.subject)
            .multipart(body)
            .map_err(|e| EmailSendError::Build(e.to_string()))
    }
}

#[async_trait]
impl EmailSender for SmtpEmailSender {
    async fn send(&self, email: OutgoingEmail) -> Result<(), EmailSendError> {
        let message = self.build_message(email)?;
        self.mailer
            .send(message)
            .await
            .map_err(EmailSendError::Transport)
    }
}
