use anyhow::Result;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, EntityTrait, Set};
use uuid::Uuid;

use super::setup_test_db;
use crate::errors::ModelError;
use crate::price_item::{self, PriceOwner};
use crate::{service, service_subsection};

#[tokio::test]
async fn price_item_owner_is_exclusive() -> Result<()> {
    let Some(db) = setup_test_db().await? else { return Ok(()) };

    let svc = service::create(&db, &format!("svc_{}", Uuid::new_v4()), None, None).await?;
    let sub = service_subsection::create(&db, svc.id, "Main hall", None, None).await?;

    // Both owners set: rejected in before_save even for raw ActiveModel writes
    let both = price_item::ActiveModel {
        id: Set(Uuid::new_v4()),
        operation_name: Set("Haircut".into()),
        price: Set(Decimal::new(100000, 2)),
        duration_minutes: Set(None),
        service_id: Set(Some(svc.id)),
        subsection_id: Set(Some(sub.id)),
    };
    assert!(both.insert(&db).await.is_err());

    // Neither owner set
    let neither = price_item::ActiveModel {
        id: Set(Uuid::new_v4()),
        operation_name: Set("Haircut".into()),
        price: Set(Decimal::new(100000, 2)),
        duration_minutes: Set(None),
        service_id: Set(None),
        subsection_id: Set(None),
    };
    assert!(neither.insert(&db).await.is_err());

    // Exactly one owner: accepted
    let ok = price_item::create(
        &db,
        "Haircut",
        Decimal::new(100000, 2),
        Some(45),
        PriceOwner::Service(svc.id),
    )
    .await?;
    assert_eq!(ok.owner(), Some(PriceOwner::Service(svc.id)));

    service::Entity::delete_by_id(svc.id).exec(&db).await?;
    Ok(())
}

#[tokio::test]
async fn operation_name_unique_within_owner_scope() -> Result<()> {
    let Some(db) = setup_test_db().await? else { return Ok(()) };

    let svc = service::create(&db, &format!("svc_{}", Uuid::new_v4()), None, None).await?;
    let other = service::create(&db, &format!("svc_{}", Uuid::new_v4()), None, None).await?;

    let price = Decimal::new(50000, 2);
    price_item::create(&db, "Manicure", price, None, PriceOwner::Service(svc.id)).await?;

    // Same name, any case, same owner: rejected
    let dup = price_item::create(&db, "MANICURE", price, None, PriceOwner::Service(svc.id)).await;
    assert!(matches!(dup, Err(ModelError::Validation(_))));

    // Same name under a different owner: fine
    let elsewhere =
        price_item::create(&db, "Manicure", price, None, PriceOwner::Service(other.id)).await;
    assert!(elsewhere.is_ok());

    service::Entity::delete_by_id(svc.id).exec(&db).await?;
    service::Entity::delete_by_id(other.id).exec(&db).await?;
    Ok(())
}

#[tokio::test]
async fn renaming_item_to_itself_passes() -> Result<()> {
    let Some(db) = setup_test_db().await? else { return Ok(()) };

    let svc = service::create(&db, &format!("svc_{}", Uuid::new_v4()), None, None).await?;
    let item = price_item::create(
        &db,
        "Coloring",
        Decimal::new(250000, 2),
        None,
        PriceOwner::Service(svc.id),
    )
    .await?;

    // No-op rename and a case-only rename both exclude the row itself
    let same = price_item::update(&db, item.id, Some("Coloring"), None, None, None).await;
    assert!(same.is_ok());
    let case_only = price_item::update(&db, item.id, Some("coloring"), None, None, None).await;
    assert!(case_only.is_ok());

    service::Entity::delete_by_id(svc.id).exec(&db).await?;
    Ok(())
}

#[tokio::test]
async fn moving_item_between_owners_rechecks_uniqueness() -> Result<()> {
    let Some(db) = setup_test_db().await? else { return Ok(()) };

    let svc = service::create(&db, &format!("svc_{}", Uuid::new_v4()), None, None).await?;
    let sub = service_subsection::create(&db, svc.id, "Ladies hall", None, None).await?;

    let price = Decimal::new(80000, 2);
    price_item::create(&db, "Styling", price, None, PriceOwner::Subsection(sub.id)).await?;
    let direct = price_item::create(&db, "Styling", price, None, PriceOwner::Service(svc.id)).await?;

    // Moving the direct item into the subsection collides with the existing name
    let moved = price_item::update(&db, direct.id, None, None, None, Some(PriceOwner::Subsection(sub.id))).await;
    assert!(matches!(moved, Err(ModelError::Validation(_))));

    service::Entity::delete_by_id(svc.id).exec(&db).await?;
    Ok(())
}

#[tokio::test]
async fn subsection_names_unique_per_service() -> Result<()> {
    let Some(db) = setup_test_db().await? else { return Ok(()) };

    let svc = service::create(&db, &format!("svc_{}", Uuid::new_v4()), None, None).await?;
    service_subsection::create(&db, svc.id, "Hall", None, None).await?;
    let dup = service_subsection::create(&db, svc.id, "Hall", None, None).await;
    assert!(matches!(dup, Err(ModelError::Validation(_))));

    // Same name under another service is fine
    let other = service::create(&db, &format!("svc_{}", Uuid::new_v4()), None, None).await?;
    assert!(service_subsection::create(&db, other.id, "Hall", None, None).await.is_ok());

    service::Entity::delete_by_id(svc.id).exec(&db).await?;
    service::Entity::delete_by_id(other.id).exec(&db).await?;
    Ok(())
}

#[tokio::test]
async fn deleting_service_cascades_to_catalog_rows() -> Result<()> {
    let Some(db) = setup_test_db().await? else { return Ok(()) };

    let svc = service::create(&db, &format!("svc_{}", Uuid::new_v4()), None, None).await?;
    let sub = service_subsection::create(&db, svc.id, "Hall", None, None).await?;
    let item = price_item::create(
        &db,
        "Trim",
        Decimal::new(30000, 2),
        None,
        PriceOwner::Subsection(sub.id),
    )
    .await?;

    assert!(service::delete(&db, svc.id).await?);
    assert!(service_subsection::Entity::find_by_id(sub.id).one(&db).await?.is_none());
    assert!(price_item::Entity::find_by_id(item.id).one(&db).await?.is_none());
    Ok(())
}
