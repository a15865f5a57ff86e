use sea_orm_migration::prelude::*;

use crate::m20250601_000001_create_cvs_table::Cvs;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Contacts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Contacts::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Contacts::CvId).integer().not_null())
                    .col(
                        ColumnDef::new(Contacts::ContactType)
                            .string_len(20)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Contacts::Value).string_len(200).not_null())
                    .col(ColumnDef::new(Contacts::Url).string_len(200).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_contacts_cv_id")
                            .from(Contacts::Table, Contacts::CvId)
                            .to(Cvs::Table, Cvs::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One contact of each type per CV
        manager
            .create_index(
                Index::create()
                    .name("idx_contacts_cv_type_unique")
                    .table(Contacts::Table)
                    .col(Contacts::CvId)
                    .col(Contacts::ContactType)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Contacts::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Contacts {
    Table,
    Id,
    CvId,
    ContactType,
    Value,
    Url,
}
