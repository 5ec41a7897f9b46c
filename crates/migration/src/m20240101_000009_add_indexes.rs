use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Social: indexes on master_id and href
        manager
            .create_index(
                Index::create()
                    .name("idx_social_master")
                    .table(Social::Table)
                    .col(Social::MasterId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_social_href")
                    .table(Social::Table)
                    .col(Social::Href)
                    .to_owned(),
            )
            .await?;

        // Review: indexes on created_at and is_public for the public listing
        manager
            .create_index(
                Index::create()
                    .name("idx_review_created_at")
                    .table(Review::Table)
                    .col(Review::CreatedAt)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_review_is_public")
                    .table(Review::Table)
                    .col(Review::IsPublic)
                    .to_owned(),
            )
            .await?;

        // PriceItem: indexes on both owner FKs
        manager
            .create_index(
                Index::create()
                    .name("idx_price_item_service")
                    .table(PriceItem::Table)
                    .col(PriceItem::ServiceId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_price_item_subsection")
                    .table(PriceItem::Table)
                    .col(PriceItem::SubsectionId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_social_master").table(Social::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_social_href").table(Social::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_review_created_at").table(Review::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_review_is_public").table(Review::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_price_item_service").table(PriceItem::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_price_item_subsection").table(PriceItem::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Social { Table, MasterId, Href }

#[derive(DeriveIden)]
enum Review { Table, CreatedAt, IsPublic }

#[derive(DeriveIden)]
enum PriceItem { Table, ServiceId, SubsectionId }
