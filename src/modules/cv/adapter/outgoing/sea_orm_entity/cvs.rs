use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "cvs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(column_type = "String(StringLen::N(100))")]
    pub firstname: String,

    #[sea_orm(column_type = "String(StringLen::N(100))")]
    pub lastname: String,

    #[sea_orm(column_type = "String(StringLen::N(254))", unique)]
    pub email: String,

    #[sea_orm(column_type = "String(StringLen::N(20))")]
    pub phone: String,

    #[sea_orm(column_type = "Text")]
    pub bio: String,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "crate::modules::skill::adapter::outgoing::sea_orm_entity::skills::Entity")]
    Skills,

    #[sea_orm(
        has_many = "crate::modules::project::adapter::outgoing::sea_orm_entity::projects::Entity"
    )]
    Projects,

    #[sea_orm(
        has_many = "crate::modules::contact::adapter::outgoing::sea_orm_entity::contacts::Entity"
    )]
    Contacts,
}

impl Related<crate::modules::skill::adapter::outgoing::sea_orm_entity::skills::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Skills.def()
    }
}

impl Related<crate::modules::project::adapter::outgoing::sea_orm_entity::projects::Entity>
    for Entity
{
    fn to() -> RelationDef {
        Relation::Projects.def()
    }
}

impl Related<crate::modules::contact::adapter::outgoing::sea_orm_entity::contacts::Entity>
    for Entity
{
    fn to() -> RelationDef {
        Relation::Contacts.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
