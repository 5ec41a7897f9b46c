//! Create `address` table.
//!
//! Single organization contact record; the presentation layer reads the first row.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Address::Table)
                    .if_not_exists()
                    .col(uuid(Address::Id).primary_key())
                    .col(string_len(Address::Name, 100).not_null())
                    .col(string_len(Address::Address, 1024).not_null())
                    .col(string_len(Address::Email, 254).not_null())
                    .col(string_len(Address::Phone, 20).not_null())
                    .col(string_len(Address::OpeningHours, 1024).not_null())
                    .col(double(Address::Latitude).not_null())
                    .col(double(Address::Longitude).not_null())
                    .col(timestamp_with_time_zone(Address::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Address::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Address::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Address {
    Table,
    Id,
    Name,
    Address,
    Email,
    Phone,
    OpeningHours,
    Latitude,
    Longitude,
    CreatedAt,
    UpdatedAt,
}
