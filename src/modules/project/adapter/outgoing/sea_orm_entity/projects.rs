use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "projects")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub cv_id: i32,

    #[sea_orm(column_type = "String(StringLen::N(200))")]
    pub title: String,

    #[sea_orm(column_type = "Text")]
    pub description: String,

    /// Comma separated.
    #[sea_orm(column_type = "String(StringLen::N(500))")]
    pub technologies: String,

    #[sea_orm(column_type = "String(StringLen::N(200))", nullable)]
    pub url: Option<String>,

    pub start_date: Date,

    #[sea_orm(nullable)]
    pub end_date: Option<Date>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::modules::cv::adapter::outgoing::sea_orm_entity::cvs::Entity",
        from = "Column::CvId",
        to = "crate::modules::cv::adapter::outgoing::sea_orm_entity::cvs::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Cvs,
}

impl Related<crate::modules::cv::adapter::outgoing::sea_orm_entity::cvs::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Cvs.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
