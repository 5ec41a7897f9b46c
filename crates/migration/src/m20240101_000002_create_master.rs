//! Create `master` table.
//!
//! Staff profiles; social links reference it.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Master::Table)
                    .if_not_exists()
                    .col(uuid(Master::Id).primary_key())
                    .col(string_len(Master::Name, 100).not_null())
                    .col(string_len(Master::Photo, 1024).not_null())
                    .col(string_len(Master::Specialty, 200).not_null())
                    .col(text(Master::Description).not_null())
                    .col(timestamp_with_time_zone(Master::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Master::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Master::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Master { Table, Id, Name, Photo, Specialty, Description, CreatedAt, UpdatedAt }
