use async_trait::async_trait;
use std::sync::Mutex;

use crate::modules::skill::application::ports::outgoing::{
    CreateSkillData, PatchSkillData, SkillQuery, SkillQueryError, SkillRepository,
    SkillRepositoryError, SkillResult, UpdateSkillData,
};
use crate::modules::skill::domain::Proficiency;

pub fn sample_skill(id: i32, cv_id: i32) -> SkillResult {
    SkillResult {
        id,
        cv_id,
        name: "Rust".to_string(),
        proficiency: Proficiency::Advanced,
    }
}

pub struct MockSkillRepo {
    pub result: Result<SkillResult, SkillRepositoryError>,
    pub last_patch: Mutex<Option<PatchSkillData>>,
}

impl MockSkillRepo {
    pub fn new(result: Result<SkillResult, SkillRepositoryError>) -> Self {
        Self {
            result,
            last_patch: Mutex::new(None),
        }
    }
}

#[async_trait]
impl SkillRepository for MockSkillRepo {
    async fn create_skill(&self, _data: CreateSkillData) -> Result<SkillResult, SkillRepositoryError> {
        self.result.clone()
    }

    async fn update_skill(
        &self,
        _skill_id: i32,
        _data: UpdateSkillData,
    ) -> Result<SkillResult, SkillRepositoryError> {
        self.result.clone()
    }

    async fn patch_skill(
        &self,
        _skill_id: i32,
        data: PatchSkillData,
    ) -> Result<SkillResult, SkillRepositoryError> {
        *self.last_patch.lock().unwrap() = Some(data);
        self.result.clone()
    }

    async fn delete_skill(&self, _skill_id: i32) -> Result<(), SkillRepositoryError> {
        self.result.clone().map(|_| ())
    }
}

pub struct MockSkillQuery {
    pub result: Result<Vec<SkillResult>, SkillQueryError>,
}

#[async_trait]
impl SkillQuery for MockSkillQuery {
    async fn get_by_id(&self, skill_id: i32) -> Result<SkillResult, SkillQueryError> {
        self.result
            .clone()?
            .into_iter()
            .find(|s| s.id == skill_id)
            .ok_or(SkillQueryError::NotFound)
    }

    async fn list(&self, cv_id: Option<i32>) -> Result<Vec<SkillResult>, SkillQueryError> {
        Ok(self
            .result
            .clone()?
            .into_iter()
            .filter(|s| cv_id.map_or(true, |cv| s.cv_id == cv))
            .collect())
    }

    async fn list_for_cv(&self, cv_id: i32) -> Result<Vec<SkillResult>, SkillQueryError> {
        self.list(Some(cv_id)).await
    }
}
