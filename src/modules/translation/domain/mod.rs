mod language;
mod term_protection;
mod translated_cv;

pub use language::{LanguageError, TargetLanguage};
pub use term_protection::{is_technical_term, protect_terms, ProtectedText, TECHNICAL_TERMS};
pub use translated_cv::{TranslatedCv, TranslatedProject, TranslatedSkill};
