use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "request_logs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    #[sea_orm(column_type = "String(StringLen::N(10))")]
    pub method: String,

    #[sea_orm(column_type = "Text")]
    pub path: String,

    #[sea_orm(column_type = "Text")]
    pub query_string: String,

    #[sea_orm(column_type = "String(StringLen::N(45))")]
    pub remote_ip: String,

    #[sea_orm(column_type = "String(StringLen::N(500))")]
    pub user_agent: String,

    #[sea_orm(nullable)]
    pub response_status: Option<i16>,

    #[sea_orm(column_type = "Double", nullable)]
    pub response_time_ms: Option<f64>,

    pub timestamp: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
