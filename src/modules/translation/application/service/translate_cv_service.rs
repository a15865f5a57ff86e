use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use crate::modules::cv::application::ports::outgoing::{CvQuery, CvQueryError};
use crate::modules::jobs::application::service::JobDispatcher;
use crate::modules::jobs::domain::{JobKind, RetryPolicy};
use crate::modules::translation::application::ports::incoming::use_cases::{
    QueuedTranslation, TranslateCvError, TranslateCvUseCase,
};
use crate::modules::translation::application::service::CvTranslationJob;
use crate::modules::translation::domain::TargetLanguage;

pub struct TranslateCvService {
    enabled: bool,
    cv_query: Arc<dyn CvQuery + Send + Sync>,
    job: Arc<CvTranslationJob>,
    dispatcher: JobDispatcher,
    policy: RetryPolicy,
}

impl TranslateCvService {
    /// `enabled` is false when no API key is configured.
    pub fn new(
        enabled: bool,
        cv_query: Arc<dyn CvQuery + Send + Sync>,
        job: Arc<CvTranslationJob>,
        dispatcher: JobDispatcher,
        policy: RetryPolicy,
    ) -> Self {
        Self {
            enabled,
            cv_query,
            job,
            dispatcher,
            policy,
        }
    }
}

#[async_trait]
impl TranslateCvUseCase for TranslateCvService {
    async fn execute(
        &self,
        cv_id: i32,
        language: TargetLanguage,
    ) -> Result<QueuedTranslation, TranslateCvError> {
        if !self.enabled {
            return Err(TranslateCvError::NotConfigured);
        }

        let cv = self.cv_query.get_detail(cv_id).await.map_err(|e| match e {
            CvQueryError::NotFound => TranslateCvError::CvNotFound(cv_id),
            CvQueryError::DatabaseError(msg) => TranslateCvError::QueryFailed(msg),
        })?;

        let job = Arc::clone(&self.job);
        let task_id = self
            .dispatcher
            .dispatch(JobKind::TranslateCvContent, self.policy, move || {
                let job = Arc::clone(&job);
                async move { job.run(cv_id, language).await }
            })
            .await
            .map_err(|e| TranslateCvError::QueueFailed(e.to_string()))?;

        info!(cv_id, task_id = %task_id, target_language = %language, "CV translation queued");

        Ok(QueuedTranslation {
            task_id,
            cv_name: cv.full_name,
            target_language: language,
        })
    }
}
