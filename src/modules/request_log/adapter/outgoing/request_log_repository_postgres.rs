use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect, Set,
};
use std::sync::Arc;

use crate::modules::request_log::adapter::outgoing::sea_orm_entity::request_logs::{
    ActiveModel, Column, Entity,
};
use crate::modules::request_log::application::ports::outgoing::{
    NewRequestLog, RequestLogRepository, RequestLogRepositoryError,
};

#[derive(Clone)]
pub struct RequestLogRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl RequestLogRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> RequestLogRepositoryError {
    RequestLogRepositoryError::DatabaseError(e.to_string())
}

// ===== Repository Implementation =====

#[async_trait]
impl RequestLogRepository for RequestLogRepositoryPostgres {
    async fn insert(&self, entry: NewRequestLog) -> Result<(), RequestLogRepositoryError> {
        // smallint column; every real HTTP status fits.
        let status = i16::try_from(entry.response_status).ok();

        let active = ActiveModel {
            id: NotSet,
            method: Set(entry.method),
            path: Set(entry.path),
            query_string: Set(entry.query_string),
            remote_ip: Set(entry.remote_ip),
            user_agent: Set(entry.user_agent),
            response_status: Set(status),
            response_time_ms: Set(Some(entry.response_time_ms)),
            timestamp: Set(Utc::now().fixed_offset()),
        };

        active.insert(&*self.db).await.map_err(map_db_err)?;
        Ok(())
    }

    async fn delete_older_than(
        &self,
        cutoff: DateTime<Utc>,
    ) -> Result<u64, RequestLogRepositoryError> {
        let result = Entity::delete_many()
            .filter(Column::Timestamp.lt(cutoff))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.rows_affected)
    }

    async fn prune(
        &self,
        cutoff: DateTime<Utc>,
        keep_recent: u64,
    ) -> Result<u64, RequestLogRepositoryError> {
        // Oldest id still inside the protected window.
        let boundary = Entity::find()
            .select_only()
            .column(Column::Id)
            .order_by_desc(Column::Id)
            .offset(keep_recent.saturating_sub(1))
            .limit(1)
            .into_tuple::<i64>()
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        let Some(boundary) = boundary else {
            return Ok(0);
        };

        let result = Entity::delete_many()
            .filter(Column::Timestamp.lt(cutoff))
            .filter(Column::Id.lt(boundary))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.rows_affected)
    }
}
