use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};
use std::sync::Arc;

use crate::modules::cv::adapter::outgoing::sea_orm_entity::cvs;
use crate::modules::project::adapter::outgoing::project_repository_postgres::model_to_result;
use crate::modules::project::adapter::outgoing::sea_orm_entity::projects::{Column, Entity};
use crate::modules::project::application::ports::outgoing::{
    ProjectQuery, ProjectQueryError, ProjectResult,
};

#[derive(Clone)]
pub struct ProjectQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProjectQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn find(&self, cv_id: Option<i32>) -> Result<Vec<ProjectResult>, ProjectQueryError> {
        let mut query = Entity::find();
        if let Some(cv_id) = cv_id {
            query = query.filter(Column::CvId.eq(cv_id));
        }

        let projects = query
            .order_by_desc(Column::StartDate)
            .order_by_asc(Column::Id)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(projects.into_iter().map(model_to_result).collect())
    }
}

#[async_trait]
impl ProjectQuery for ProjectQueryPostgres {
    async fn get_by_id(&self, project_id: i32) -> Result<ProjectResult, ProjectQueryError> {
        Entity::find_by_id(project_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(model_to_result)
            .ok_or(ProjectQueryError::NotFound)
    }

    async fn list(&self, cv_id: Option<i32>) -> Result<Vec<ProjectResult>, ProjectQueryError> {
        self.find(cv_id).await
    }

    async fn list_for_cv(&self, cv_id: i32) -> Result<Vec<ProjectResult>, ProjectQueryError> {
        let exists = cvs::Entity::find_by_id(cv_id)
            .count(&*self.db)
            .await
            .map_err(map_db_err)?
            > 0;

        if !exists {
            return Err(ProjectQueryError::CvNotFound);
        }

        self.find(Some(cv_id)).await
    }
}

fn map_db_err(e: DbErr) -> ProjectQueryError {
    ProjectQueryError::DatabaseError(e.to_string())
}
