use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq)]
pub struct CvPdf {
    pub filename: String,
    pub full_name: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ExportCvPdfError {
    #[error("CV not found")]
    NotFound,

    #[error("Failed to load CV: {0}")]
    QueryFailed(String),

    #[error("Failed to render PDF: {0}")]
    RenderFailed(String),
}

#[async_trait]
pub trait ExportCvPdfUseCase: Send + Sync {
    async fn execute(&self, cv_id: i32) -> Result<CvPdf, ExportCvPdfError>;
}
