use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ScrapeRecords::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ScrapeRecords::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ScrapeRecords::UserEmail).string().not_null())
                    .col(
                        ColumnDef::new(ScrapeRecords::Website)
                            .string_len(500)
                            .not_null(),
                    )
                    .col(ColumnDef::new(ScrapeRecords::Query).text().not_null())
                    .col(ColumnDef::new(ScrapeRecords::Answer).text().not_null())
                    .col(
                        ColumnDef::new(ScrapeRecords::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ScrapeRecords::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ScrapeRecords {
    Table,
    Id,
    UserEmail,
    Website,
    Query,
    Answer,
    CreatedAt,
}
