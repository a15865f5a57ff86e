mod export_cv_pdf_service;

pub use export_cv_pdf_service::ExportCvPdfService;
