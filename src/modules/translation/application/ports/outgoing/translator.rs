use async_trait::async_trait;

/// One chat completion: a system instruction plus the text to translate.
#[derive(Debug, Clone, PartialEq)]
pub struct TranslationRequest {
    pub system_prompt: String,
    pub text: String,
    pub max_tokens: u32,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TranslatorError {
    #[error("Translation request failed: {0}")]
    Connection(String),

    #[error("Translation API returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Translation API returned no choices")]
    EmptyResponse,
}

#[async_trait]
pub trait Translator: Send + Sync {
    /// Returns the trimmed completion text.
    async fn translate(&self, request: TranslationRequest) -> Result<String, TranslatorError>;
}
