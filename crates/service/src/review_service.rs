//! Public review submission and the moderation surface.
//!
//! The submission predicate mirrors the landing form: rating parse failures
//! coerce to 0 (which then fails the range check) instead of erroring, and
//! the public endpoint only ever sees one generic message.

use sea_orm::DatabaseConnection;
use tracing::info;
use uuid::Uuid;

use models::review;

use crate::errors::ServiceError;

/// The only validation message the public endpoint surfaces.
pub const INVALID_SUBMISSION_MSG: &str = "Check the fields and rating";

/// Parse the raw rating field; any missing or malformed value becomes 0,
/// which the validity predicate rejects uniformly.
pub fn coerce_rating(raw: Option<&str>) -> i16 {
    raw.and_then(|s| s.trim().parse::<i16>().ok()).unwrap_or(0)
}

pub fn submission_is_valid(name: &str, review_text: &str, rating: i16) -> bool {
    !name.trim().is_empty() && !review_text.trim().is_empty() && (1..=5).contains(&rating)
}

/// Persist an end-user submission. The stored row starts hidden
/// (`is_public = false`) until moderation releases it.
pub async fn submit(
    db: &DatabaseConnection,
    name: &str,
    email: &str,
    review_text: &str,
    rating_raw: Option<&str>,
) -> Result<review::Model, ServiceError> {
    let name = name.trim();
    let email = email.trim();
    let review_text = review_text.trim();
    let rating = coerce_rating(rating_raw);

    if !submission_is_valid(name, review_text, rating) {
        return Err(ServiceError::Validation(INVALID_SUBMISSION_MSG.into()));
    }

    let created = review::create(
        db,
        name,
        (!email.is_empty()).then_some(email),
        review_text,
        Some(rating),
    )
    .await?;
    info!(id = %created.id, rating, "review submitted, pending moderation");
    Ok(created)
}

pub async fn list_public(db: &DatabaseConnection, limit: u64) -> Result<Vec<review::Model>, ServiceError> {
    Ok(review::list_public(db, limit).await?)
}

/// Moderation view: everything, newest first.
pub async fn list_all(db: &DatabaseConnection) -> Result<Vec<review::Model>, ServiceError> {
    Ok(review::list_all(db).await?)
}

pub async fn set_visibility(db: &DatabaseConnection, id: Uuid, is_public: bool) -> Result<review::Model, ServiceError> {
    let updated = review::set_public(db, id, is_public).await?;
    info!(id = %updated.id, is_public, "review visibility changed");
    Ok(updated)
}

pub async fn delete(db: &DatabaseConnection, id: Uuid) -> Result<bool, ServiceError> {
    Ok(review::delete(db, id).await?)
}
