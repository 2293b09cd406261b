use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Bug::Table)
                    .if_not_exists()
                    .col(pk_auto(Bug::Id))
                    .col(string(Bug::Title))
                    .col(text_null(Bug::Description))
                    .col(string(Bug::Status))
                    .col(
                        timestamp_with_time_zone(Bug::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Bug::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Bug {
    Table,
    Id,
    Title,
    Description,
    Status,
    CreatedAt,
}
