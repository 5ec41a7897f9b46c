//! Create `service_subsection` table with FK to `service`.
//!
//! Subsections of one service must have unique names.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ServiceSubsection::Table)
                    .if_not_exists()
                    .col(uuid(ServiceSubsection::Id).primary_key())
                    .col(uuid(ServiceSubsection::ServiceId).not_null())
                    .col(string_len(ServiceSubsection::Name, 255).not_null())
                    .col(ColumnDef::new(ServiceSubsection::Description).text().null())
                    .col(ColumnDef::new(ServiceSubsection::TitleImage).string_len(1024).null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_subsection_service")
                            .from(ServiceSubsection::Table, ServiceSubsection::ServiceId)
                            .to(Service::Table, Service::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .name("uniq_subsection_service_name")
                            .col(ServiceSubsection::ServiceId)
                            .col(ServiceSubsection::Name)
                            .unique(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(ServiceSubsection::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum ServiceSubsection { Table, Id, ServiceId, Name, Description, TitleImage }

#[derive(DeriveIden)]
enum Service { Table, Id }
