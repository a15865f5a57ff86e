use async_trait::async_trait;

use crate::modules::skill::application::ports::incoming::use_cases::{
    GetCvSkillsError, GetCvSkillsUseCase, GetSingleSkillError, GetSingleSkillUseCase,
    GetSkillsError, GetSkillsUseCase,
};
use crate::modules::skill::application::ports::outgoing::{SkillQuery, SkillQueryError, SkillResult};

//
// ──────────────────────────────────────────────────────────
// List
// ──────────────────────────────────────────────────────────
//

pub struct GetSkillsService<Q>
where
    Q: SkillQuery,
{
    query: Q,
}

impl<Q> GetSkillsService<Q>
where
    Q: SkillQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetSkillsUseCase for GetSkillsService<Q>
where
    Q: SkillQuery + Send + Sync,
{
    async fn execute(&self, cv_id: Option<i32>) -> Result<Vec<SkillResult>, GetSkillsError> {
        self.query
            .list(cv_id)
            .await
            .map_err(|e| GetSkillsError::QueryFailed(e.to_string()))
    }
}

//
// ──────────────────────────────────────────────────────────
// Skills of one CV
// ──────────────────────────────────────────────────────────
//

pub struct GetCvSkillsService<Q>
where
    Q: SkillQuery,
{
    query: Q,
}

impl<Q> GetCvSkillsService<Q>
where
    Q: SkillQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetCvSkillsUseCase for GetCvSkillsService<Q>
where
    Q: SkillQuery + Send + Sync,
{
    async fn execute(&self, cv_id: i32) -> Result<Vec<SkillResult>, GetCvSkillsError> {
        self.query.list_for_cv(cv_id).await.map_err(|e| match e {
            SkillQueryError::CvNotFound => GetCvSkillsError::CvNotFound,
            other => GetCvSkillsError::QueryFailed(other.to_string()),
        })
    }
}

//
// ──────────────────────────────────────────────────────────
// Single
// ──────────────────────────────────────────────────────────
//

pub struct GetSingleSkillService<Q>
where
    Q: SkillQuery,
{
    query: Q,
}

impl<Q> GetSingleSkillService<Q>
where
    Q: SkillQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetSingleSkillUseCase for GetSingleSkillService<Q>
where
    Q: SkillQuery + Send + Sync,
{
    async fn execute(&self, skill_id: i32) -> Result<SkillResult, GetSingleSkillError> {
        self.query.get_by_id(skill_id).await.map_err(|e| match e {
            SkillQueryError::NotFound => GetSingleSkillError::NotFound,
            other => GetSingleSkillError::QueryFailed(other.to_string()),
        })
    }
}
