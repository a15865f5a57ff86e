use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};
use std::sync::Arc;

use crate::modules::cv::adapter::outgoing::sea_orm_entity::cvs;
use crate::modules::skill::adapter::outgoing::sea_orm_entity::skills::{Column, Entity};
use crate::modules::skill::adapter::outgoing::skill_repository_postgres::model_to_result;
use crate::modules::skill::application::ports::outgoing::{SkillQuery, SkillQueryError, SkillResult};

#[derive(Clone)]
pub struct SkillQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl SkillQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SkillQuery for SkillQueryPostgres {
    async fn get_by_id(&self, skill_id: i32) -> Result<SkillResult, SkillQueryError> {
        Entity::find_by_id(skill_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(model_to_result)
            .ok_or(SkillQueryError::NotFound)
    }

    async fn list(&self, cv_id: Option<i32>) -> Result<Vec<SkillResult>, SkillQueryError> {
        let mut query = Entity::find();
        if let Some(cv_id) = cv_id {
            query = query.filter(Column::CvId.eq(cv_id));
        }

        let skills = query
            .order_by_asc(Column::Name)
            .order_by_asc(Column::Id)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(skills.into_iter().map(model_to_result).collect())
    }

    async fn list_for_cv(&self, cv_id: i32) -> Result<Vec<SkillResult>, SkillQueryError> {
        let exists = cvs::Entity::find_by_id(cv_id)
            .count(&*self.db)
            .await
            .map_err(map_db_err)?
            > 0;

        if !exists {
            return Err(SkillQueryError::CvNotFound);
        }

        let skills = Entity::find()
            .filter(Column::CvId.eq(cv_id))
            .order_by_asc(Column::Id)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(skills.into_iter().map(model_to_result).collect())
    }
}

fn map_db_err(e: DbErr) -> SkillQueryError {
    SkillQueryError::DatabaseError(e.to_string())
}
