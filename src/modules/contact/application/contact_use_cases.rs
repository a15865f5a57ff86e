use std::sync::Arc;

use crate::modules::contact::application::ports::incoming::use_cases::{
    CreateContactUseCase, DeleteContactUseCase, GetContactsUseCase, GetCvContactsUseCase,
    GetSingleContactUseCase, PatchContactUseCase, UpdateContactUseCase,
};

#[derive(Clone)]
pub struct ContactUseCases {
    pub create: Arc<dyn CreateContactUseCase + Send + Sync>,
    pub get_list: Arc<dyn GetContactsUseCase + Send + Sync>,
    pub get_for_cv: Arc<dyn GetCvContactsUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetSingleContactUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateContactUseCase + Send + Sync>,
    pub patch: Arc<dyn PatchContactUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteContactUseCase + Send + Sync>,
}
