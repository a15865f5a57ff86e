use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use crate::modules::cv::application::ports::outgoing::{CvQuery, CvQueryError};
use crate::modules::email::application::ports::incoming::use_cases::{
    QueuedEmail, SendCvEmailCommand, SendCvEmailError, SendCvEmailUseCase,
};
use crate::modules::email::application::service::CvEmailJob;
use crate::modules::jobs::application::service::JobDispatcher;
use crate::modules::jobs::domain::{JobKind, RetryPolicy};

pub struct SendCvEmailService {
    cv_query: Arc<dyn CvQuery + Send + Sync>,
    job: Arc<CvEmailJob>,
    dispatcher: JobDispatcher,
    policy: RetryPolicy,
}

impl SendCvEmailService {
    pub fn new(
        cv_query: Arc<dyn CvQuery + Send + Sync>,
        job: Arc<CvEmailJob>,
        dispatcher: JobDispatcher,
        policy: RetryPolicy,
    ) -> Self {
        Self {
            cv_query,
            job,
            dispatcher,
            policy,
        }
    }
}

#[async_trait]
impl SendCvEmailUseCase for SendCvEmailService {
    async fn execute(
        &self,
        cv_id: i32,
        command: SendCvEmailCommand,
    ) -> Result<QueuedEmail, SendCvEmailError> {
        let cv = self.cv_query.get_detail(cv_id).await.map_err(|e| match e {
            CvQueryError::NotFound => SendCvEmailError::CvNotFound(cv_id),
            CvQueryError::DatabaseError(msg) => SendCvEmailError::QueryFailed(msg),
        })?;

        let recipient = command.recipient().to_string();
        let sender_name = command.sender_name().map(str::to_string);

        let job = Arc::clone(&self.job);
        let job_recipient = recipient.clone();
        let task_id = self
            .dispatcher
            .dispatch(JobKind::SendCvPdfEmail, self.policy, move || {
                let job = Arc::clone(&job);
                let recipient = job_recipient.clone();
                let sender_name = sender_name.clone();
                async move { job.run(cv_id, &recipient, sender_name.as_deref()).await }
            })
            .await
            .map_err(|e| SendCvEmailError::QueueFailed(e.to_string()))?;

        info!(cv_id, task_id = %task_id, "CV email queued");

        Ok(QueuedEmail {
            task_id,
            cv_name: cv.full_name,
            recipient,
        })
    }
}
