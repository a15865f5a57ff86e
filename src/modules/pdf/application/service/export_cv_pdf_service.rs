use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use crate::modules::cv::application::ports::outgoing::{CvQuery, CvQueryError};
use crate::modules::pdf::application::ports::incoming::use_cases::{
    CvPdf, ExportCvPdfError, ExportCvPdfUseCase,
};
use crate::modules::pdf::application::ports::outgoing::CvPdfRenderer;
use crate::modules::pdf::domain::pdf_filename;

pub struct ExportCvPdfService<Q>
where
    Q: CvQuery,
{
    query: Q,
    renderer: Arc<dyn CvPdfRenderer + Send + Sync>,
}

impl<Q> ExportCvPdfService<Q>
where
    Q: CvQuery,
{
    pub fn new(query: Q, renderer: Arc<dyn CvPdfRenderer + Send + Sync>) -> Self {
        Self { query, renderer }
    }
}

#[async_trait]
impl<Q> ExportCvPdfUseCase for ExportCvPdfService<Q>
where
    Q: CvQuery + Send + Sync,
{
    async fn execute(&self, cv_id: i32) -> Result<CvPdf, ExportCvPdfError> {
        let cv = self.query.get_detail(cv_id).await.map_err(|e| match e {
            CvQueryError::NotFound => ExportCvPdfError::NotFound,
            CvQueryError::DatabaseError(msg) => ExportCvPdfError::QueryFailed(msg),
        })?;

        let bytes = self
            .renderer
            .render(&cv)
            .map_err(|e| ExportCvPdfError::RenderFailed(e.to_string()))?;

        info!(cv_id, size = bytes.len(), "Rendered CV PDF");

        Ok(CvPdf {
            filename: pdf_filename(&cv.full_name),
            full_name: cv.full_name,
            bytes,
        })
    }
}
