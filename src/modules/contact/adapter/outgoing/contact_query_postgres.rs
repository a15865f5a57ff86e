use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};
use std::sync::Arc;

use crate::modules::contact::adapter::outgoing::contact_repository_postgres::model_to_result;
use crate::modules::contact::adapter::outgoing::sea_orm_entity::contacts::{Column, Entity};
use crate::modules::contact::application::ports::outgoing::{
    ContactQuery, ContactQueryError, ContactResult,
};
use crate::modules::cv::adapter::outgoing::sea_orm_entity::cvs;

#[derive(Clone)]
pub struct ContactQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ContactQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ContactQuery for ContactQueryPostgres {
    async fn get_by_id(&self, contact_id: i32) -> Result<ContactResult, ContactQueryError> {
        Entity::find_by_id(contact_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(model_to_result)
            .ok_or(ContactQueryError::NotFound)
    }

    async fn list(&self, cv_id: Option<i32>) -> Result<Vec<ContactResult>, ContactQueryError> {
        let mut query = Entity::find();
        if let Some(cv_id) = cv_id {
            query = query.filter(Column::CvId.eq(cv_id));
        }

        let contacts = query
            .order_by_asc(Column::ContactType)
            .order_by_asc(Column::Id)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(contacts.into_iter().map(model_to_result).collect())
    }

    async fn list_for_cv(&self, cv_id: i32) -> Result<Vec<ContactResult>, ContactQueryError> {
        if cvs::Entity::find_by_id(cv_id)
            .count(&*self.db)
            .await
            .map_err(map_db_err)?
            == 0
        {
            return Err(ContactQueryError::CvNotFound);
        }

        let contacts = Entity::find()
            .filter(Column::CvId.eq(cv_id))
            .order_by_asc(Column::Id)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(contacts.into_iter().map(model_to_result).collect())
    }
}

fn map_db_err(e: DbErr) -> ContactQueryError {
    ContactQueryError::DatabaseError(e.to_string())
}
