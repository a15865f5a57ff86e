use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime};
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::{
    sea_query::{Expr, Func, SimpleExpr}, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Select,
};
use std::sync::Arc;

use crate::modules::request_log::adapter::outgoing::sea_orm_entity::request_logs::{
    Column, Entity, Model,
};
use crate::modules::request_log::application::ports::outgoing::{
    RequestLogFilter, RequestLogQuery, RequestLogQueryError, RequestLogStats, RequestLogView,
};
use crate::shared::pagination::{PageRequest, PageResult};
use crate::shared::sql_pattern::contains_pattern;

#[derive(Clone)]
pub struct RequestLogQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl RequestLogQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> RequestLogQueryError {
    RequestLogQueryError::DatabaseError(e.to_string())
}

fn start_of(day: NaiveDate) -> chrono::DateTime<chrono::Utc> {
    day.and_time(NaiveTime::MIN).and_utc()
}

fn filtered(filter: &RequestLogFilter) -> Select<Entity> {
    let mut query = Entity::find();

    if let Some(ref method) = filter.method {
        query = query.filter(Column::Method.eq(method.as_str()));
    }
    if let Some(status) = filter.status {
        query = query.filter(Column::ResponseStatus.eq(i32::from(status)));
    }
    if let Some(ref path) = filter.path {
        query = query.filter(Expr::col(Column::Path).ilike(contains_pattern(path)));
    }
    if let Some(ref ip) = filter.ip {
        query = query.filter(Column::RemoteIp.eq(ip.as_str()));
    }
    if let Some(from) = filter.date_from {
        query = query.filter(Column::Timestamp.gte(start_of(from)));
    }
    // Inclusive: everything before the start of the following day.
    if let Some(next_day) = filter.date_to.and_then(|to| to.succ_opt()) {
        query = query.filter(Column::Timestamp.lt(start_of(next_day)));
    }

    query
}

pub(crate) fn model_to_view(model: Model) -> RequestLogView {
    RequestLogView {
        id: model.id,
        method: model.method,
        path: model.path,
        query_string: model.query_string,
        remote_ip: model.remote_ip,
        user_agent: model.user_agent,
        response_status: model.response_status.and_then(|s| u16::try_from(s).ok()),
        response_time_ms: model.response_time_ms,
        timestamp: model.timestamp.into(),
    }
}

#[async_trait]
impl RequestLogQuery for RequestLogQueryPostgres {
    async fn list(
        &self,
        filter: &RequestLogFilter,
        page: PageRequest,
    ) -> Result<PageResult<RequestLogView>, RequestLogQueryError> {
        let query = filtered(filter)
            .order_by_desc(Column::Timestamp)
            .order_by_desc(Column::Id);

        let total = query.clone().count(&*self.db).await.map_err(map_db_err)?;

        let rows = query
            .offset(page.offset())
            .limit(page.per_page)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(PageResult {
            items: rows.into_iter().map(model_to_view).collect(),
            page: page.page,
            per_page: page.per_page,
            total,
        })
    }

    async fn stats(&self, filter: &RequestLogFilter) -> Result<RequestLogStats, RequestLogQueryError> {
        let total = filtered(filter).count(&*self.db).await.map_err(map_db_err)?;

        let avg_response_time_ms = filtered(filter)
            .select_only()
            .column_as(SimpleExpr::from(Func::avg(Expr::col(Column::ResponseTimeMs))), "avg_response_time_ms")
            .into_tuple::<Option<f64>>()
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .flatten();

        let error_count = filtered(filter)
            .filter(Column::ResponseStatus.gte(400))
            .count(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(RequestLogStats {
            total,
            avg_response_time_ms,
            error_count,
        })
    }

    async fn count(&self) -> Result<u64, RequestLogQueryError> {
        Entity::find().count(&*self.db).await.map_err(map_db_err)
    }
}
