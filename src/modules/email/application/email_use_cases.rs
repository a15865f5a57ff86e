use std::sync::Arc;

use crate::modules::email::application::ports::incoming::use_cases::SendCvEmailUseCase;

#[derive(Clone)]
pub struct EmailUseCases {
    pub send_cv: Arc<dyn SendCvEmailUseCase + Send + Sync>,
}
