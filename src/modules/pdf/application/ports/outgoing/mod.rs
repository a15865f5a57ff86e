pub mod cv_pdf_renderer;

pub use cv_pdf_renderer::{CvPdfRenderer, PdfError};
