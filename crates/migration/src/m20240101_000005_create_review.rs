//! Create `review` table.
//!
//! Customer feedback; rows stay hidden until moderation flips `is_public`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Review::Table)
                    .if_not_exists()
                    .col(uuid(Review::Id).primary_key())
                    .col(string_len(Review::Name, 100).not_null())
                    // Nullable unique: repeat anonymous submissions must not collide
                    .col(
                        ColumnDef::new(Review::Email)
                            .string_len(254)
                            .null()
                            .unique_key(),
                    )
                    .col(text(Review::Review).not_null())
                    .col(ColumnDef::new(Review::Rating).small_integer().null())
                    .col(boolean(Review::IsPublic).not_null().default(false))
                    .col(timestamp_with_time_zone(Review::CreatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Review::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Review { Table, Id, Name, Email, Review, Rating, IsPublic, CreatedAt }
