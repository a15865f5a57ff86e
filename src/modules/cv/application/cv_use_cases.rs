use std::sync::Arc;

use crate::modules::cv::application::ports::incoming::use_cases::{
    BrowseCvsUseCase, CreateCvUseCase, DeleteCvUseCase, GetCvsUseCase, GetSingleCvUseCase,
    PatchCvUseCase, UpdateCvUseCase,
};

#[derive(Clone)]
pub struct CvUseCases {
    pub create: Arc<dyn CreateCvUseCase + Send + Sync>,
    pub get_list: Arc<dyn GetCvsUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetSingleCvUseCase + Send + Sync>,
    pub browse: Arc<dyn BrowseCvsUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateCvUseCase + Send + Sync>,
    pub patch: Arc<dyn PatchCvUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteCvUseCase + Send + Sync>,
}
