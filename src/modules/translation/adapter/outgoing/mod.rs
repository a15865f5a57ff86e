pub mod openai_translator;

pub use openai_translator::OpenAiTranslator;
