use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, NotSet, QueryFilter, Set,
};
use std::sync::Arc;

use crate::modules::skill::adapter::outgoing::sea_orm_entity::skills::{
    self, ActiveModel, Column, Entity,
};
use crate::modules::skill::application::ports::outgoing::{
    CreateSkillData, PatchSkillData, SkillRepository, SkillRepositoryError, SkillResult,
    UpdateSkillData,
};
use crate::shared::db_error::{classify, DbErrorKind};

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct SkillRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl SkillRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SkillRepository for SkillRepositoryPostgres {
    async fn create_skill(&self, data: CreateSkillData) -> Result<SkillResult, SkillRepositoryError> {
        let model = ActiveModel {
            id: NotSet,
            cv_id: Set(data.cv_id),
            name: Set(data.name),
            proficiency: Set(data.proficiency.as_str().to_string()),
        };

        let result = model.insert(&*self.db).await.map_err(map_write_err)?;

        Ok(model_to_result(result))
    }

    async fn update_skill(
        &self,
        skill_id: i32,
        data: UpdateSkillData,
    ) -> Result<SkillResult, SkillRepositoryError> {
        let model = ActiveModel {
            cv_id: Set(data.cv_id),
            name: Set(data.name),
            proficiency: Set(data.proficiency.as_str().to_string()),
            ..Default::default()
        };

        self.update_returning(skill_id, model).await
    }

    async fn patch_skill(
        &self,
        skill_id: i32,
        data: PatchSkillData,
    ) -> Result<SkillResult, SkillRepositoryError> {
        if data.is_empty() {
            let existing = Entity::find_by_id(skill_id)
                .one(&*self.db)
                .await
                .map_err(map_db_err)?
                .ok_or(SkillRepositoryError::NotFound)?;

            return Ok(model_to_result(existing));
        }

        let mut model = <ActiveModel as Default>::default();

        if let Some(cv_id) = data.cv_id {
            model.cv_id = Set(cv_id);
        }
        if let Some(name) = data.name {
            model.name = Set(name);
        }
        if let Some(proficiency) = data.proficiency {
            model.proficiency = Set(proficiency.as_str().to_string());
        }

        self.update_returning(skill_id, model).await
    }

    async fn delete_skill(&self, skill_id: i32) -> Result<(), SkillRepositoryError> {
        let result = Entity::delete_by_id(skill_id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(SkillRepositoryError::NotFound);
        }

        Ok(())
    }
}

impl SkillRepositoryPostgres {
    async fn update_returning(
        &self,
        skill_id: i32,
        model: ActiveModel,
    ) -> Result<SkillResult, SkillRepositoryError> {
        Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(skill_id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_write_err)?
            .into_iter()
            .next()
            .map(model_to_result)
            .ok_or(SkillRepositoryError::NotFound)
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

pub(crate) fn model_to_result(model: skills::Model) -> SkillResult {
    SkillResult {
        id: model.id,
        cv_id: model.cv_id,
        name: model.name,
        proficiency: model.proficiency.parse().unwrap_or_default(),
    }
}

fn map_write_err(e: DbErr) -> SkillRepositoryError {
    match classify(&e) {
        DbErrorKind::UniqueViolation => SkillRepositoryError::AlreadyExists,
        DbErrorKind::ForeignKeyViolation => SkillRepositoryError::CvNotFound,
        DbErrorKind::Other => SkillRepositoryError::DatabaseError(e.to_string()),
    }
}

fn map_db_err(e: DbErr) -> SkillRepositoryError {
    SkillRepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
