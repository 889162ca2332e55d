//! Create `houses` table.
//! One row per vacation rental listing. Both timestamps default to the
//! database clock so application code never writes them on insert.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Houses::Table)
                    .if_not_exists()
                    .col(pk_auto(Houses::Id))
                    .col(string_len(Houses::Name, 255).not_null())
                    .col(string_len_null(Houses::ImageName, 255))
                    .col(text(Houses::Description).not_null())
                    .col(integer(Houses::Price).not_null())
                    .col(integer(Houses::Capacity).not_null())
                    .col(string_len(Houses::PostalCode, 50).not_null())
                    .col(string_len(Houses::Address, 255).not_null())
                    .col(string_len(Houses::PhoneNumber, 50).not_null())
                    .col(
                        timestamp(Houses::CreatedAt)
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp(Houses::UpdatedAt)
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Houses::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Houses {
    Table,
    Id,
    Name,
    ImageName,
    Description,
    Price,
    Capacity,
    PostalCode,
    Address,
    PhoneNumber,
    CreatedAt,
    UpdatedAt,
}
