use async_trait::async_trait;

use crate::modules::jobs::domain::JobId;
use crate::modules::translation::domain::TargetLanguage;

#[derive(Debug, Clone, PartialEq)]
pub struct QueuedTranslation {
    pub task_id: JobId,
    pub cv_name: String,
    pub target_language: TargetLanguage,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum TranslateCvError {
    #[error("Translation service is not configured")]
    NotConfigured,

    #[error("CV with ID {0} not found")]
    CvNotFound(i32),

    #[error("Failed to load CV: {0}")]
    QueryFailed(String),

    #[error("Failed to queue translation: {0}")]
    QueueFailed(String),
}

#[async_trait]
pub trait TranslateCvUseCase: Send + Sync {
    async fn execute(
        &self,
        cv_id: i32,
        language: TargetLanguage,
    ) -> Result<QueuedTranslation, TranslateCvError>;
}
