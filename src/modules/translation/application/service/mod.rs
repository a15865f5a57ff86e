mod cv_translation_job;
mod translate_cv_service;

#[cfg(test)]
pub(crate) mod test_doubles;

pub use cv_translation_job::CvTranslationJob;
pub use translate_cv_service::TranslateCvService;
