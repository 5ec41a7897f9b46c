//! Create `social` table with FK to `master`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Social::Table)
                    .if_not_exists()
                    .col(uuid(Social::Id).primary_key())
                    .col(uuid(Social::MasterId).not_null())
                    .col(string_len(Social::Href, 1024).not_null())
                    .col(string_len(Social::Icon, 200).not_null())
                    .col(string_len(Social::Color, 7).not_null())
                    .col(integer(Social::SortOrder).not_null())
                    .col(timestamp_with_time_zone(Social::CreatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_social_master")
                            .from(Social::Table, Social::MasterId)
                            .to(Master::Table, Master::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Social::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Social { Table, Id, MasterId, Href, Icon, Color, SortOrder, CreatedAt }

#[derive(DeriveIden)]
enum Master { Table, Id }
