use std::sync::Arc;

use crate::modules::translation::application::ports::incoming::use_cases::TranslateCvUseCase;

#[derive(Clone)]
pub struct TranslationUseCases {
    pub translate: Arc<dyn TranslateCvUseCase + Send + Sync>,
}
