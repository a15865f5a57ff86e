use std::sync::Arc;

use crate::modules::pdf::application::ports::incoming::use_cases::ExportCvPdfUseCase;

#[derive(Clone)]
pub struct PdfUseCases {
    pub export: Arc<dyn ExportCvPdfUseCase + Send + Sync>,
}
