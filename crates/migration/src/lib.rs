//! Migrator registering one migration per table, in FK dependency order.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_address;
mod m20240101_000002_create_master;
mod m20240101_000003_create_social;
mod m20240101_000004_create_gallery_image;
mod m20240101_000005_create_review;
mod m20240101_000006_create_service;
mod m20240101_000007_create_service_subsection;
mod m20240101_000008_create_price_item;
mod m20240101_000009_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_address::Migration),
            Box::new(m20240101_000002_create_master::Migration),
            Box::new(m20240101_000003_create_social::Migration),
            Box::new(m20240101_000004_create_gallery_image::Migration),
            Box::new(m20240101_000005_create_review::Migration),
            Box::new(m20240101_000006_create_service::Migration),
            Box::new(m20240101_000007_create_service_subsection::Migration),
            Box::new(m20240101_000008_create_price_item::Migration),
            // Indexes should always be applied last
            Box::new(m20240101_000009_add_indexes::Migration),
        ]
    }
}
