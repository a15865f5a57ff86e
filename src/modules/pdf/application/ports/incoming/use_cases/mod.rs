mod export_cv_pdf;

pub use export_cv_pdf::{CvPdf, ExportCvPdfError, ExportCvPdfUseCase};
