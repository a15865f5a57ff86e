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
                    .table(Skills::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Skills::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Skills::CvId).integer().not_null())
                    .col(ColumnDef::new(Skills::Name).string_len(100).not_null())
                    .col(
                        ColumnDef::new(Skills::Proficiency)
                            .string_len(20)
                            .not_null()
                            .default("intermediate"),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_skills_cv_id")
                            .from(Skills::Table, Skills::CvId)
                            .to(Cvs::Table, Cvs::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One skill name per CV
        manager
            .create_index(
                Index::create()
                    .name("idx_skills_cv_name_unique")
                    .table(Skills::Table)
                    .col(Skills::CvId)
                    .col(Skills::Name)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Skills::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Skills {
    Table,
    Id,
    CvId,
    Name,
    Proficiency,
}
