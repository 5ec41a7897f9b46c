//! Read-only aggregation for the landing page.

use sea_orm::DatabaseConnection;

use crate::dto::{GalleryImageOut, PageContext, ReviewOut};
use crate::errors::ServiceError;
use crate::{address_service, catalog_service, gallery_service, master_service, review_service};

/// How many gallery images the landing page shows.
pub const GALLERY_LIMIT: u64 = 20;
/// How many public reviews the landing page shows.
pub const REVIEW_LIMIT: u64 = 20;

/// Assemble the whole landing-page snapshot: all masters with socials, the
/// first 20 gallery images, the last 20 public reviews (newest first), the
/// full catalog with derived price lists, and the contact record if any.
pub async fn get_common_context(db: &DatabaseConnection) -> Result<PageContext, ServiceError> {
    let masters = master_service::list_masters_with_socials(db).await?;
    let images = gallery_service::first_images(db, GALLERY_LIMIT)
        .await?
        .into_iter()
        .map(GalleryImageOut::from)
        .collect();
    let reviews = review_service::list_public(db, REVIEW_LIMIT)
        .await?
        .into_iter()
        .map(ReviewOut::from)
        .collect();
    let services = catalog_service::list_services_with_prices(db).await?;
    let address = address_service::current_address(db).await?;

    Ok(PageContext { masters, images, reviews, services, address })
}
