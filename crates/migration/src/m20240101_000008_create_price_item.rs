//! Create `price_item` table with FKs to `service` and `service_subsection`.
//!
//! Exactly one of the two FKs is set per row; the entity layer enforces this
//! before every save.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PriceItem::Table)
                    .if_not_exists()
                    .col(uuid(PriceItem::Id).primary_key())
                    .col(string_len(PriceItem::OperationName, 255).not_null())
                    .col(decimal_len(PriceItem::Price, 10, 2).not_null())
                    .col(ColumnDef::new(PriceItem::DurationMinutes).integer().null())
                    .col(ColumnDef::new(PriceItem::ServiceId).uuid().null())
                    .col(ColumnDef::new(PriceItem::SubsectionId).uuid().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_price_item_service")
                            .from(PriceItem::Table, PriceItem::ServiceId)
                            .to(Service::Table, Service::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_price_item_subsection")
                            .from(PriceItem::Table, PriceItem::SubsectionId)
                            .to(ServiceSubsection::Table, ServiceSubsection::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(PriceItem::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum PriceItem { Table, Id, OperationName, Price, DurationMinutes, ServiceId, SubsectionId }

#[derive(DeriveIden)]
enum Service { Table, Id }

#[derive(DeriveIden)]
enum ServiceSubsection { Table, Id }
