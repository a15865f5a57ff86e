use crate::modules::cv::application::ports::outgoing::CvDetailView;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PdfError {
    #[error("Font error: {0}")]
    Font(String),

    #[error("PDF write error: {0}")]
    Write(String),
}

/// Rendering is CPU-only and synchronous.
pub trait CvPdfRenderer: Send + Sync {
    fn render(&self, cv: &CvDetailView) -> Result<Vec<u8>, PdfError>;
}
