use async_trait::async_trait;
use serde::Serialize;

use crate::modules::email::domain::validate_recipient;
use crate::modules::jobs::domain::JobId;
use crate::shared::validation::FieldError;

#[derive(Debug, Clone, PartialEq)]
pub struct SendCvEmailCommand {
    recipient: String,
    sender_name: Option<String>,
}

impl SendCvEmailCommand {
    pub fn new(email: Option<&str>, sender_name: Option<&str>) -> Result<Self, FieldError> {
        Ok(Self {
            recipient: validate_recipient(email)?,
            sender_name: sender_name.map(str::to_string),
        })
    }

    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    pub fn sender_name(&self) -> Option<&str> {
        self.sender_name.as_deref()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueuedEmail {
    pub task_id: JobId,
    pub cv_name: String,
    pub recipient: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum SendCvEmailError {
    #[error("CV with ID {0} not found")]
    CvNotFound(i32),

    #[error("Failed to load CV: {0}")]
    QueryFailed(String),

    #[error("Failed to queue email: {0}")]
    QueueFailed(String),
}

#[async_trait]
pub trait SendCvEmailUseCase: Send + Sync {
    async fn execute(
        &self,
        cv_id: i32,
        command: SendCvEmailCommand,
    ) -> Result<QueuedEmail, SendCvEmailError>;
}
