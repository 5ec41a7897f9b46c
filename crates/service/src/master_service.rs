use std::collections::HashMap;

use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};
use uuid::Uuid;

use models::{master, social};

use crate::dto::MasterOut;
use crate::errors::ServiceError;

pub async fn list_masters(db: &DatabaseConnection) -> Result<Vec<master::Model>, ServiceError> {
    master::Entity::find()
        .order_by_asc(master::Column::CreatedAt)
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}

/// All masters with their social links attached, links in sort order.
/// Two queries, grouped in memory.
pub async fn list_masters_with_socials(db: &DatabaseConnection) -> Result<Vec<MasterOut>, ServiceError> {
    let masters = list_masters(db).await?;
    let socials = social::Entity::find()
        .order_by_asc(social::Column::SortOrder)
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;

    let mut by_master: HashMap<Uuid, Vec<social::Model>> = HashMap::new();
    for s in socials {
        by_master.entry(s.master_id).or_default().push(s);
    }
    Ok(masters
        .into_iter()
        .map(|m| {
            let links = by_master.remove(&m.id).unwrap_or_default();
            MasterOut::from_parts(m, links)
        })
        .collect())
}

pub async fn get_master(db: &DatabaseConnection, id: Uuid) -> Result<Option<master::Model>, ServiceError> {
    master::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}

pub async fn create_master(
    db: &DatabaseConnection,
    name: &str,
    photo: &str,
    specialty: &str,
    description: &str,
) -> Result<master::Model, ServiceError> {
    Ok(master::create(db, name, photo, specialty, description).await?)
}

pub async fn update_master(
    db: &DatabaseConnection,
    id: Uuid,
    name: Option<&str>,
    photo: Option<&str>,
    specialty: Option<&str>,
    description: Option<&str>,
) -> Result<master::Model, ServiceError> {
    Ok(master::update(db, id, name, photo, specialty, description).await?)
}

pub async fn delete_master(db: &DatabaseConnection, id: Uuid) -> Result<bool, ServiceError> {
    Ok(master::delete(db, id).await?)
}

pub async fn list_socials(db: &DatabaseConnection, master_id: Uuid) -> Result<Vec<social::Model>, ServiceError> {
    Ok(social::list_for_master(db, master_id).await?)
}

pub async fn create_social(
    db: &DatabaseConnection,
    master_id: Uuid,
    href: &str,
    icon: &str,
    color: &str,
    sort_order: i32,
) -> Result<social::Model, ServiceError> {
    if get_master(db, master_id).await?.is_none() {
        return Err(ServiceError::not_found("master"));
    }
    Ok(social::create(db, master_id, href, icon, color, sort_order).await?)
}

pub async fn update_social(
    db: &DatabaseConnection,
    id: Uuid,
    href: Option<&str>,
    icon: Option<&str>,
    color: Option<&str>,
    sort_order: Option<i32>,
) -> Result<social::Model, ServiceError> {
    Ok(social::update(db, id, href, icon, color, sort_order).await?)
}

pub async fn delete_social(db: &DatabaseConnection, id: Uuid) -> Result<bool, ServiceError> {
    Ok(social::delete(db, id).await?)
}
