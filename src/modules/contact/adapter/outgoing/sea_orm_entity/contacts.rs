use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "contacts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub cv_id: i32,

    /// One of the `ContactType` values.
    #[sea_orm(column_type = "String(StringLen::N(20))")]
    pub contact_type: String,

    #[sea_orm(column_type = "String(StringLen::N(200))")]
    pub value: String,

    #[sea_orm(column_type = "String(StringLen::N(200))")]
    pub url: String,
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
