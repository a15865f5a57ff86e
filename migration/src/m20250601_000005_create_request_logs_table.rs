use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RequestLogs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(RequestLogs::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(RequestLogs::Method).string_len(10).not_null())
                    .col(ColumnDef::new(RequestLogs::Path).text().not_null())
                    .col(
                        ColumnDef::new(RequestLogs::QueryString)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(RequestLogs::RemoteIp).string_len(45).not_null())
                    .col(
                        ColumnDef::new(RequestLogs::UserAgent)
                            .string_len(500)
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(RequestLogs::ResponseStatus).small_integer())
                    .col(ColumnDef::new(RequestLogs::ResponseTimeMs).double())
                    .col(
                        ColumnDef::new(RequestLogs::Timestamp)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Indexes used by the log viewer filters and cleanup
        // =====================================================
        let indexes: [(&str, Vec<RequestLogs>); 4] = [
            ("idx_request_logs_timestamp", vec![RequestLogs::Timestamp]),
            (
                "idx_request_logs_method_timestamp",
                vec![RequestLogs::Method, RequestLogs::Timestamp],
            ),
            (
                "idx_request_logs_status_timestamp",
                vec![RequestLogs::ResponseStatus, RequestLogs::Timestamp],
            ),
            (
                "idx_request_logs_ip_timestamp",
                vec![RequestLogs::RemoteIp, RequestLogs::Timestamp],
            ),
        ];

        for (name, columns) in indexes {
            let mut index = Index::create();
            index.name(name).table(RequestLogs::Table);
            for column in columns {
                index.col(column);
            }
            manager.create_index(index.to_owned()).await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RequestLogs::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum RequestLogs {
    Table,
    Id,
    Method,
    Path,
    QueryString,
    RemoteIp,
    UserAgent,
    ResponseStatus,
    ResponseTimeMs,
    Timestamp,
}
