use anyhow::Result;
use sea_orm::EntityTrait;
use uuid::Uuid;

use super::setup_test_db;
use crate::errors::ModelError;
use crate::review;

#[tokio::test]
async fn new_reviews_start_hidden() -> Result<()> {
    let Some(db) = setup_test_db().await? else { return Ok(()) };

    let rev = review::create(&db, "Anna", None, "Great!", Some(5)).await?;
    assert!(!rev.is_public);
    assert_eq!(rev.rating, Some(5));

    // Hidden rows never reach the public listing
    let public = review::list_public(&db, 20).await?;
    assert!(public.iter().all(|r| r.id != rev.id));

    review::delete(&db, rev.id).await?;
    Ok(())
}

#[tokio::test]
async fn out_of_range_rating_is_rejected() -> Result<()> {
    let Some(db) = setup_test_db().await? else { return Ok(()) };

    let zero = review::create(&db, "Anna", None, "Great!", Some(0)).await;
    assert!(matches!(zero, Err(ModelError::Validation(_))));
    let six = review::create(&db, "Anna", None, "Great!", Some(6)).await;
    assert!(matches!(six, Err(ModelError::Validation(_))));
    Ok(())
}

#[tokio::test]
async fn public_listing_is_limited_and_newest_first() -> Result<()> {
    let Some(db) = setup_test_db().await? else { return Ok(()) };

    let mut ids = Vec::new();
    for i in 0..3 {
        let email = format!("rev_{}@example.com", Uuid::new_v4());
        let rev = review::create(&db, "Guest", Some(&email), &format!("review {i}"), Some(4)).await?;
        review::set_public(&db, rev.id, true).await?;
        ids.push(rev.id);
    }

    let listed = review::list_public(&db, 2).await?;
    assert!(listed.len() <= 2);
    assert!(listed.windows(2).all(|w| w[0].created_at >= w[1].created_at));
    assert!(listed.iter().all(|r| r.is_public));

    for id in ids {
        review::Entity::delete_by_id(id).exec(&db).await?;
    }
    Ok(())
}

#[tokio::test]
async fn moderating_a_missing_review_is_not_found() -> Result<()> {
    let Some(db) = setup_test_db().await? else { return Ok(()) };

    let gone = review::set_public(&db, Uuid::new_v4(), true).await;
    assert!(matches!(gone, Err(ModelError::NotFound(_))));
    Ok(())
}

#[tokio::test]
async fn empty_email_is_stored_as_null() -> Result<()> {
    let Some(db) = setup_test_db().await? else { return Ok(()) };

    let a = review::create(&db, "Anna", Some("  "), "First", Some(5)).await?;
    // A second anonymous review must not collide on the unique email column
    let b = review::create(&db, "Boris", Some(""), "Second", Some(4)).await?;
    assert_eq!(a.email, None);
    assert_eq!(b.email, None);

    review::delete(&db, a.id).await?;
    review::delete(&db, b.id).await?;
    Ok(())
}
