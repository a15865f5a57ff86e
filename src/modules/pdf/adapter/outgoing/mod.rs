pub mod printpdf_renderer;

pub use printpdf_renderer::{render_cv_pdf, PrintPdfRenderer};
