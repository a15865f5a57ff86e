pub mod translator;

pub use translator::{TranslationRequest, Translator, TranslatorError};
