use std::sync::Arc;

use crate::modules::skill::application::ports::incoming::use_cases::{
    CreateSkillUseCase, DeleteSkillUseCase, GetCvSkillsUseCase, GetSingleSkillUseCase,
    GetSkillsUseCase, PatchSkillUseCase, UpdateSkillUseCase,
};

#[derive(Clone)]
pub struct SkillUseCases {
    pub create: Arc<dyn CreateSkillUseCase + Send + Sync>,
    pub get_list: Arc<dyn GetSkillsUseCase + Send + Sync>,
    pub get_for_cv: Arc<dyn GetCvSkillsUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetSingleSkillUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateSkillUseCase + Send + Sync>,
    pub patch: Arc<dyn PatchSkillUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteSkillUseCase + Send + Sync>,
}
