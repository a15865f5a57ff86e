mod download_pdf;

pub use download_pdf::download_cv_pdf_handler;
