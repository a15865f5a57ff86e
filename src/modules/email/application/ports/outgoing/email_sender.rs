use async_trait::async_trait;

use crate::modules::email::domain::OutgoingEmail;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EmailSendError {
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Failed to build message: {0}")]
    Build(String),

    #[error("Failed to deliver message: {0}")]
    Transport(String),
}

impl EmailSendError {
    /// Only delivery failures are worth another attempt.
    pub fn is_transient(&self) -> bool {
        matches!(self, EmailSendError::Transport(_))
    }
}

#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send(&self, email: OutgoingEmail) -> Result<(), EmailSendError>;
}
